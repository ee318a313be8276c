// ============================================================================
// Arithmetic Interfaces
// One contract per operator; every operation yields a new value or an error
// ============================================================================

/// Checked addition producing a new value
pub trait Addition<Rhs: ?Sized = Self> {
    type Output;
    type Error;

    fn add(&self, other: &Rhs) -> Result<Self::Output, Self::Error>;
}

/// Checked subtraction producing a new value
pub trait Subtraction<Rhs: ?Sized = Self> {
    type Output;
    type Error;

    fn subtract(&self, other: &Rhs) -> Result<Self::Output, Self::Error>;
}

/// Checked multiplication producing a new value
pub trait Multiplication<Rhs: ?Sized = Self> {
    type Output;
    type Error;

    fn multiply(&self, other: &Rhs) -> Result<Self::Output, Self::Error>;
}

/// Checked division producing a new value
///
/// Implementations must fail rather than divide by their zero value.
pub trait Division<Rhs: ?Sized = Self> {
    type Output;
    type Error;

    fn divide(&self, divisor: &Rhs) -> Result<Self::Output, Self::Error>;
}

/// Integer division: `divide` yields the quotient, `remainder` what is left over
///
/// The rounding convention of the quotient and the sign of the remainder are
/// chosen by the implementation and must be documented there.
pub trait IntegerDivision<Rhs: ?Sized = Self>: Division<Rhs> {
    fn remainder(&self, divisor: &Rhs) -> Result<Self::Output, Self::Error>;
}
