/// Non-fatal messages that are shown to the acting user.
pub trait UserMessages {
    fn warning(&self, message: &str);
}
