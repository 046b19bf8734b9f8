/// Display label for a raw rating value. Anything outside the 1..=5 scale
/// maps to "Not Rated" instead of erroring.
pub fn rating_label(rating: i32) -> &'static str {
    match rating {
        5 => "Outstanding",
        4 => "Exceeds Expectations",
        3 => "Meets Expectations",
        2 => "Below Expectations",
        1 => "Unsatisfactory",
        _ => "Not Rated",
    }
}
