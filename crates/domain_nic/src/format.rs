/// Groups a NIC for display.
///
/// Legacy numbers become `YY DDD SSS CV` and modern numbers
/// `YYYY DDD SSSS C`. Anything else is returned with whitespace removed.
///
/// ```rust
/// use domain_nic::format_nic;
///
/// assert_eq!(format_nic("741922757V"), "74 192 275 7V");
/// assert_eq!(format_nic("197419202757"), "1974 192 0275 7");
/// assert_eq!(format_nic("12 34"), "1234");
/// ```
pub fn format_nic(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = cleaned.as_bytes();

    let is_legacy = bytes.len() == 10
        && bytes[..9].iter().all(u8::is_ascii_digit)
        && bytes[9].is_ascii_alphanumeric();
    let is_modern = bytes.len() == 12 && bytes.iter().all(u8::is_ascii_digit);

    if is_legacy {
        format!(
            "{} {} {} {}",
            &cleaned[0..2],
            &cleaned[2..5],
            &cleaned[5..8],
            &cleaned[8..10]
        )
    } else if is_modern {
        format!(
            "{} {} {} {}",
            &cleaned[0..4],
            &cleaned[4..7],
            &cleaned[7..11],
            &cleaned[11..12]
        )
    } else {
        cleaned
    }
}
