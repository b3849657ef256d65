//! Form validation helpers shared by the register, profile, address and
//! seller forms. Pure functions; the backend revalidates everything.

/// Vietnamese mobile number: exactly 10 digits, leading `0`, second digit a
/// valid carrier prefix (03x, 05x, 07x, 08x, 09x).
pub fn is_valid_phone(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    if bytes.len() != 10 || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }
    bytes[0] == b'0' && matches!(bytes[1], b'3' | b'5' | b'7' | b'8' | b'9')
}

/// Loose structural check; the backend sends the verification mail anyway.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    // Domain needs an interior dot.
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Password strength score, 0..=100: weighted bonus per length tier and
/// character class.
pub fn password_strength(password: &str) -> u8 {
    let mut score = 0u8;

    let len = password.chars().count();
    if len >= 6 {
        score += 10;
    }
    if len >= 8 {
        score += 10;
    }
    if len >= 12 {
        score += 10;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 15;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 15;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 20;
    }

    score
}

pub fn strength_label(score: u8) -> &'static str {
    match score {
        0..=39 => "Yếu",
        40..=59 => "Trung bình",
        60..=79 => "Mạnh",
        _ => "Rất mạnh",
    }
}

/// Progress-bar color class for the strength meter.
pub fn strength_class(score: u8) -> &'static str {
    match score {
        0..=39 => "progress progress-error",
        40..=59 => "progress progress-warning",
        60..=79 => "progress progress-info",
        _ => "progress progress-success",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_vietnamese_mobile_numbers() {
        assert!(is_valid_phone("0912345678"));
        assert!(is_valid_phone("0351234567"));
        assert!(is_valid_phone("0789999999"));
    }

    #[test]
    fn rejects_foreign_or_malformed_numbers() {
        assert!(!is_valid_phone("1234567890")); // no leading 0
        assert!(!is_valid_phone("0112345678")); // dead carrier prefix
        assert!(!is_valid_phone("091234567")); // too short
        assert!(!is_valid_phone("09123456789")); // too long
        assert!(!is_valid_phone("09a2345678"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn email_structural_checks() {
        assert!(is_valid_email("sinhvien@hust.edu.vn"));
        assert!(is_valid_email("a.b@example.com"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn long_mixed_password_is_very_strong() {
        let score = password_strength("MatKhau@2025!x");
        assert!(score >= 80, "score was {score}");
        assert_eq!(strength_label(score), "Rất mạnh");
    }

    #[test]
    fn short_plain_password_is_weak() {
        let score = password_strength("abc");
        assert!(score < 40, "score was {score}");
        assert_eq!(strength_label(score), "Yếu");
    }

    #[test]
    fn digits_only_password_stays_below_strong() {
        let score = password_strength("12345678");
        assert!(score < 60, "score was {score}");
    }

    #[test]
    fn strength_meter_classes_follow_labels() {
        assert_eq!(strength_class(10), "progress progress-error");
        assert_eq!(strength_class(90), "progress progress-success");
    }
}
