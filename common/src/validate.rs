//! 入力値の検証

/// 商品IDとして有効か判定
///
/// 前後の空白を除いた値が空でなく、すべてASCII数字であれば有効。
/// 小数・符号・桁区切りは受け付けない。
///
/// # Examples
/// ```
/// use request_combiner_common::is_valid_id;
///
/// assert!(is_valid_id(" 123 "));
/// assert!(!is_valid_id("12.5"));
/// assert!(!is_valid_id(""));
/// ```
pub fn is_valid_id(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit())
}
