use std::cmp::Ordering;

const MAX_SUGGESTIONS: usize = 5;

/// Formats a " Did you mean ...?" hint, or the empty string when there is
/// nothing to suggest.
///
/// ```rust
/// use libgql::utilities::did_you_mean;
///
/// let names = vec!["name".to_string(), "nickname".to_string()];
/// assert_eq!(did_you_mean(None, &names), " Did you mean \"name\" or \"nickname\"?");
/// assert_eq!(did_you_mean(None, &[]), "");
/// ```
pub fn did_you_mean(sub_message: Option<&str>, suggestions: &[String]) -> String {
    let quoted = suggestions
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|suggestion| format!("\"{suggestion}\""))
        .collect::<Vec<_>>();
    let mut message = " Did you mean ".to_string();
    if let Some(sub_message) = sub_message {
        message.push_str(sub_message);
        message.push(' ');
    }
    match quoted.as_slice() {
        [] => return String::new(),
        [only] => message.push_str(only),
        [first, second] => message.push_str(&format!("{first} or {second}")),
        [init @ .., last] => message.push_str(&format!("{}, or {last}", init.join(", "))),
    }
    message.push('?');
    message
}

/// The options close enough to `input` to be worth suggesting, best match
/// first.
///
/// Closeness is the case-insensitive optimal string alignment distance; an
/// option qualifies when that distance is at most 40% of the input's length
/// (plus one). Ties sort in natural order.
pub fn suggestion_list(input: &str, options: &[&str]) -> Vec<String> {
    let distance = LexicalDistance::new(input);
    let threshold = input.chars().count() * 2 / 5 + 1;
    let mut scored = options
        .iter()
        .filter_map(|option| Some((distance.measure(option, threshold)?, *option)))
        .collect::<Vec<_>>();
    scored.sort_by(|(a_dist, a), (b_dist, b)| {
        a_dist.cmp(b_dist).then_with(|| natural_compare(a, b))
    });
    scored.dedup_by(|a, b| a.1 == b.1);
    scored.into_iter().map(|(_, option)| option.to_string()).collect()
}

struct LexicalDistance<'a> {
    input: &'a str,
    input_lower: String,
    input_chars: Vec<char>,
}

impl<'a> LexicalDistance<'a> {
    fn new(input: &'a str) -> Self {
        let input_lower = input.to_lowercase();
        Self {
            input,
            input_chars: input_lower.chars().collect(),
            input_lower,
        }
    }

    fn measure(&self, option: &str, threshold: usize) -> Option<usize> {
        if self.input == option {
            return Some(0);
        }
        let option_lower = option.to_lowercase();
        // Differing only by case counts as a single edit.
        if self.input_lower == option_lower {
            return Some(1);
        }

        let (a, b) = {
            let option_chars = option_lower.chars().collect::<Vec<_>>();
            if option_chars.len() < self.input_chars.len() {
                (self.input_chars.clone(), option_chars)
            } else {
                (option_chars, self.input_chars.clone())
            }
        };
        let (a_len, b_len) = (a.len(), b.len());
        if a_len - b_len > threshold {
            return None;
        }

        let mut rows = [
            (0..=b_len).collect::<Vec<_>>(),
            vec![0; b_len + 1],
            vec![0; b_len + 1],
        ];
        for i in 1..=a_len {
            let current = i % 3;
            let previous = (i - 1) % 3;
            rows[current][0] = i;
            let mut smallest = i;
            for j in 1..=b_len {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                let mut value = (rows[previous][j] + 1)
                    .min(rows[current][j - 1] + 1)
                    .min(rows[previous][j - 1] + cost);
                if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                    let double_previous = (i - 2) % 3;
                    value = value.min(rows[double_previous][j - 2] + 1);
                }
                smallest = smallest.min(value);
                rows[current][j] = value;
            }
            if smallest > threshold {
                return None;
            }
        }

        let distance = rows[a_len % 3][b_len];
        (distance <= threshold).then_some(distance)
    }
}

/// Compares strings so that embedded digit runs order numerically
/// (`field2` before `field10`).
pub(crate) fn natural_compare(a: &str, b: &str) -> Ordering {
    let (mut a_chars, mut b_chars) = (a.chars().peekable(), b.chars().peekable());
    loop {
        match (a_chars.peek().copied(), b_chars.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(a_ch), Some(b_ch)) if a_ch.is_ascii_digit() && b_ch.is_ascii_digit() => {
                let a_num = take_number(&mut a_chars);
                let b_num = take_number(&mut b_chars);
                match a_num.cmp(&b_num) {
                    Ordering::Equal => (),
                    other => return other,
                }
            },
            (Some(a_ch), Some(b_ch)) => {
                a_chars.next();
                b_chars.next();
                match a_ch.cmp(&b_ch) {
                    Ordering::Equal => (),
                    other => return other,
                }
            },
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> u128 {
    let mut num: u128 = 0;
    while let Some(digit) = chars.peek().and_then(|ch| ch.to_digit(10)) {
        num = num.saturating_mul(10).saturating_add(u128::from(digit));
        chars.next();
    }
    num
}
