use crate::model::Price;


// Price label used on the menu, in the drawer and in order messages
pub fn format_price(amount: Price) -> String {
    format!("Rs {}", amount)
}


// Keep only the digits of a phone number, as deep links expect
pub fn digits_only(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}


// Staggered animation delay in seconds for the n-th element of a group
pub fn stagger_delay(index: usize, step_secs: f64) -> f64 {
    index as f64 * step_secs
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rupees() {
        assert_eq!(format_price(0), "Rs 0");
        assert_eq!(format_price(1250), "Rs 1250");
    }

    #[test]
    fn strips_phone_punctuation() {
        assert_eq!(digits_only("+92 316 2341381"), "923162341381");
    }
}
