use std::num::ParseFloatError;

// Comma is accepted as the decimal separator; every comma becomes a dot
// before standard parsing, so grouped forms like "1,234.56" do not parse.
pub fn parse_number(token: &str) -> Result<f64, ParseFloatError> {
    token.replace(',', ".").parse::<f64>()
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/numeric.rs"]
mod tests;
