#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResumeForm {
    pub user_description: String,
}

impl ResumeForm {
    pub const DESCRIPTION_FIELD: &'static str = "user_description";

    /// Reads the description out of an urlencoded body.
    ///
    /// Never fails: anything that does not carry the field yields an empty
    /// description, and the first value wins when the field repeats.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let user_description = form_urlencoded::parse(body)
            .find(|(key, _)| key == Self::DESCRIPTION_FIELD)
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();

        Self { user_description }
    }
}
