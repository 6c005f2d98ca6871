mod extend_schema_tests;
mod sdl_validation_tests;
