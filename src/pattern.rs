//! Placeholder patterns for rendering numbers, e.g. `"#.## KiB"` or `"0.0"`.
//!
//! | character     | meaning                                                  |
//! |---------------|----------------------------------------------------------|
//! | `#`           | digit, omitted when it would be a leading or trailing zero |
//! | `0`           | digit, always written                                    |
//! | `.`           | decimal point                                            |
//! | `,`           | group the integer digits in thousands                    |
//! | `%`           | multiply by 100, then write `%` in place                 |
//! | `'...'` `"..."` | literal text                                           |
//! | `\x`          | literal `x`                                              |
//!
//! The first contiguous run of `#0.,` characters holding at least one `#` or `0` is
//! the number. Every other character is copied to the output as it is. Midpoints are
//! rounded away from zero, so `"#"` renders `2.5` as `3`.
//!
//! Exponent notation (`E+0`) and `;` sections are not supported: those characters are
//! copied as literal text, and a later run of `#0` is literal text as well.

/// A parsed number pattern.
///
/// # Examples
///
/// ```
/// use ferris_size::NumberPattern;
///
/// assert_eq!(NumberPattern::new("#.## KiB").render(10.5), "10.5 KiB");
/// assert_eq!(NumberPattern::new("0.00").render(3.14159), "3.14");
/// assert_eq!(NumberPattern::new("#,##0").render(1234567.0), "1,234,567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPattern {
    prefix: String,
    suffix: String,
    number: Option<NumberSection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberSection {
    min_integer_digits: usize,
    min_fraction_digits: usize,
    max_fraction_digits: usize,
    grouping: bool,
    percent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    Placeholder(char),
    Percent,
}

impl Token {
    fn is_placeholder(&self) -> bool {
        matches!(self, Token::Placeholder(_))
    }

    fn is_digit(&self) -> bool {
        matches!(self, Token::Placeholder('#' | '0'))
    }

    fn as_char(&self) -> char {
        match *self {
            Token::Literal(c) | Token::Placeholder(c) => c,
            Token::Percent => '%',
        }
    }
}

impl NumberPattern {
    pub fn new(pattern: &str) -> Self {
        let tokens = tokenize(pattern);

        let Some((start, end)) = find_number(&tokens) else {
            return Self {
                prefix: tokens.iter().map(Token::as_char).collect(),
                suffix: String::new(),
                number: None,
            };
        };

        let run: Vec<char> = tokens[start..end].iter().map(Token::as_char).collect();
        let (integer, fraction) = match run.iter().position(|&c| c == '.') {
            Some(point) => (&run[..point], &run[point + 1..]),
            None => (&run[..], &run[..0]),
        };

        let integer_digits: Vec<char> = integer.iter().copied().filter(|&c| c != ',').collect();
        let fraction_digits: Vec<char> = fraction
            .iter()
            .copied()
            .filter(|&c| c == '#' || c == '0')
            .collect();

        let number = NumberSection {
            min_integer_digits: integer_digits
                .iter()
                .position(|&c| c == '0')
                .map_or(0, |first_zero| integer_digits.len() - first_zero),
            min_fraction_digits: fraction_digits
                .iter()
                .rposition(|&c| c == '0')
                .map_or(0, |last_zero| last_zero + 1),
            max_fraction_digits: fraction_digits.len(),
            grouping: integer.contains(&','),
            percent: tokens.contains(&Token::Percent),
        };

        Self {
            prefix: tokens[..start].iter().map(Token::as_char).collect(),
            suffix: tokens[end..].iter().map(Token::as_char).collect(),
            number: Some(number),
        }
    }

    /// Whether `pattern` contains a `#` or `0` anywhere.
    pub fn has_digit_placeholder(pattern: &str) -> bool {
        pattern.contains('#') || pattern.contains('0')
    }

    pub fn render(&self, value: f64) -> String {
        let Some(section) = self.number else {
            return format!("{}{}", self.prefix, self.suffix);
        };

        let magnitude = if section.percent {
            value.abs() * 100.0
        } else {
            value.abs()
        };
        let number = section.render_magnitude(magnitude);
        let negative = value < 0.0 && number.bytes().any(|b| matches!(b, b'1'..=b'9'));

        let mut out = String::with_capacity(self.prefix.len() + number.len() + self.suffix.len() + 1);
        if negative {
            out.push('-');
        }
        out.push_str(&self.prefix);
        out.push_str(&number);
        out.push_str(&self.suffix);
        out
    }
}

impl NumberSection {
    fn render_magnitude(&self, magnitude: f64) -> String {
        let magnitude = round_half_away_from_zero(magnitude, self.max_fraction_digits);
        let fixed = format!("{:.*}", self.max_fraction_digits, magnitude);
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let kept = fraction.trim_end_matches('0').len().max(self.min_fraction_digits);
        let fraction = &fraction[..kept.min(fraction.len())];

        let significant = integer.trim_start_matches('0');
        let mut integer = "0".repeat(self.min_integer_digits.saturating_sub(significant.len()));
        integer.push_str(significant);
        if self.grouping {
            integer = group_thousands(&integer);
        }

        if fraction.is_empty() {
            integer
        } else {
            format!("{}.{}", integer, fraction)
        }
    }
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    tokens.push(Token::Literal(escaped));
                }
            }
            '\'' | '"' => {
                for quoted in chars.by_ref() {
                    if quoted == c {
                        break;
                    }
                    tokens.push(Token::Literal(quoted));
                }
            }
            '#' | '0' | '.' | ',' => tokens.push(Token::Placeholder(c)),
            '%' => tokens.push(Token::Percent),
            _ => tokens.push(Token::Literal(c)),
        }
    }

    tokens
}

/// Bounds of the first run of placeholders that holds a digit placeholder.
fn find_number(tokens: &[Token]) -> Option<(usize, usize)> {
    let mut start = 0;

    while start < tokens.len() {
        if !tokens[start].is_placeholder() {
            start += 1;
            continue;
        }

        let end = tokens[start..]
            .iter()
            .position(|token| !token.is_placeholder())
            .map_or(tokens.len(), |len| start + len);

        if tokens[start..end].iter().any(Token::is_digit) {
            return Some((start, end));
        }
        start = end;
    }

    None
}

/// Rounds a non-negative magnitude to `digits` fraction digits, midpoints away from zero.
///
/// Magnitudes too large to scale without losing their fraction are returned unchanged.
fn round_half_away_from_zero(magnitude: f64, digits: usize) -> f64 {
    const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

    let Ok(exponent) = i32::try_from(digits) else {
        return magnitude;
    };
    let factor = 10f64.powi(exponent);
    let scaled = magnitude * factor;
    if !scaled.is_finite() || scaled >= EXACT_INTEGER_LIMIT {
        return magnitude;
    }

    scaled.round() / factor
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
