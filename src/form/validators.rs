use regex::Regex;

pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

pub fn required(message: &str) -> Validator {
    let msg = message.to_string();
    Box::new(move |value: &str| {
        if value.trim().is_empty() {
            Err(msg.clone())
        } else {
            Ok(())
        }
    })
}

pub fn min_chars(min: usize, message: &str) -> Validator {
    let msg = message.to_string();
    Box::new(move |value: &str| {
        if value.chars().count() < min {
            Err(msg.clone())
        } else {
            Ok(())
        }
    })
}

pub fn max_chars(max: usize, message: &str) -> Validator {
    let msg = message.to_string();
    Box::new(move |value: &str| {
        if value.chars().count() > max {
            Err(msg.clone())
        } else {
            Ok(())
        }
    })
}

pub fn pattern(pattern: &str, message: &str) -> Validator {
    let re = Regex::new(pattern).expect("invalid validator pattern");
    let msg = message.to_string();
    Box::new(move |value: &str| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err(msg.clone())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{max_chars, min_chars, pattern, required};

    #[test]
    fn required_rejects_whitespace_only_values() {
        let validator = required("needed");
        assert_eq!(validator("   "), Err("needed".to_string()));
        assert_eq!(validator("x"), Ok(()));
    }

    #[test]
    fn length_bounds_count_chars_not_bytes() {
        let min = min_chars(3, "too short");
        assert_eq!(min("äöü"), Ok(()));
        assert_eq!(min("äö"), Err("too short".to_string()));

        let max = max_chars(2, "too long");
        assert_eq!(max("äö"), Ok(()));
        assert_eq!(max("äöü"), Err("too long".to_string()));
    }

    #[test]
    fn pattern_uses_the_given_message() {
        let validator = pattern(r"^\d+$", "digits only");
        assert_eq!(validator("123"), Ok(()));
        assert_eq!(validator("12a"), Err("digits only".to_string()));
    }
}
