/// Supplies a presentation-ready label for menus or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Multiplies a unit count by a unit price.
///
/// Quantities never come close to 2^53, so the conversion is exact.
pub fn extended_value(quantity: u64, price: f64) -> f64 {
    quantity as f64 * price
}
