//! Number formatting conventions for the `set_culture` shorthand.

/// Separators and sign used to print numbers for a given culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Culture {
    pub name: &'static str,
    pub decimal_separator: char,
    pub group_separator: char,
    pub negative_sign: char,
    /// Whether the integer part is split into groups of three digits.
    pub grouping: bool,
}

impl Culture {
    pub const INVARIANT: Culture = Culture {
        name: "invariant",
        decimal_separator: '.',
        group_separator: ',',
        negative_sign: '-',
        grouping: false,
    };

    pub const EN_US: Culture = Culture {
        name: "en-US",
        decimal_separator: '.',
        group_separator: ',',
        negative_sign: '-',
        grouping: false,
    };

    pub const DE_DE: Culture = Culture {
        name: "de-DE",
        decimal_separator: ',',
        group_separator: '.',
        negative_sign: '-',
        grouping: false,
    };

    pub const FR_FR: Culture = Culture {
        name: "fr-FR",
        decimal_separator: ',',
        group_separator: '\u{202f}',
        negative_sign: '-',
        grouping: false,
    };

    pub const RU_RU: Culture = Culture {
        name: "ru-RU",
        decimal_separator: ',',
        group_separator: '\u{a0}',
        negative_sign: '-',
        grouping: false,
    };

    const PRESETS: [Culture; 5] = [
        Culture::INVARIANT,
        Culture::EN_US,
        Culture::DE_DE,
        Culture::FR_FR,
        Culture::RU_RU,
    ];

    /// Looks a preset up by its name, ignoring ASCII case and accepting `_`
    /// for `-`.
    pub fn from_name(name: &str) -> Option<Culture> {
        let wanted = name.replace('_', "-");
        Self::PRESETS
            .iter()
            .find(|culture| culture.name.eq_ignore_ascii_case(&wanted))
            .copied()
    }

    pub fn with_grouping(self) -> Self {
        Self {
            grouping: true,
            ..self
        }
    }

    /// Rewrites the output of Rust's `Display` for a number (`-1234.5`,
    /// `inf`, `NaN`) using this culture's separators.
    pub fn localize(&self, plain: &str) -> String {
        let (negative, digits) = match plain.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, plain),
        };

        if !digits.starts_with(|c: char| c.is_ascii_digit()) {
            return plain.to_string();
        }

        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits, None),
        };

        let mut output = String::with_capacity(plain.len() + plain.len() / 3);
        if negative {
            output.push(self.negative_sign);
        }
        output.push_str(&self.group(integer));
        if let Some(fraction) = fraction {
            output.push(self.decimal_separator);
            output.push_str(fraction);
        }
        output
    }

    fn group(&self, integer: &str) -> String {
        if !self.grouping || integer.len() <= 3 {
            return integer.to_string();
        }

        let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

impl Default for Culture {
    fn default() -> Self {
        Culture::INVARIANT
    }
}

/// Numbers that can be printed under a [`Culture`].
pub trait FormatNumber {
    fn format_with(&self, culture: &Culture) -> String;
}

macro_rules! format_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FormatNumber for $ty {
                fn format_with(&self, culture: &Culture) -> String {
                    culture.localize(&self.to_string())
                }
            }
        )*
    };
}

format_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_separator() {
        assert_eq!(1.5f64.format_with(&Culture::DE_DE), "1,5");
        assert_eq!(1.5f64.format_with(&Culture::EN_US), "1.5");
        assert_eq!((-0.25f32).format_with(&Culture::RU_RU), "-0,25");
    }

    #[test]
    fn test_integers_group_only_when_enabled() {
        assert_eq!(1234567i64.format_with(&Culture::DE_DE), "1234567");
        assert_eq!(
            1234567i64.format_with(&Culture::DE_DE.with_grouping()),
            "1.234.567"
        );
        assert_eq!(
            (-1234i32).format_with(&Culture::EN_US.with_grouping()),
            "-1,234"
        );
        assert_eq!(123u8.format_with(&Culture::EN_US.with_grouping()), "123");
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        assert_eq!(f64::NAN.format_with(&Culture::DE_DE), "NaN");
        assert_eq!(f64::NEG_INFINITY.format_with(&Culture::DE_DE), "-inf");
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(Culture::from_name("de_de"), Some(Culture::DE_DE));
        assert_eq!(Culture::from_name("RU-ru"), Some(Culture::RU_RU));
        assert_eq!(Culture::from_name("xx-YY"), None);
    }
}
