/// Input fields a controller can read from or move focus to.
///
/// The login form uses [`Field::Username`] and [`Field::Password`]; the
/// password-reset form uses [`Field::Username`], [`Field::NewPassword`],
/// [`Field::ConfirmPassword`] and [`Field::Otp`]. How each field is bound to
/// a concrete input element is an adapter concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
    NewPassword,
    ConfirmPassword,
    Otp,
}
