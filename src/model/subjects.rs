#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Math,
    Reading,
    Writing,
}

impl Subject {
    /// Column header in the input file, matched exactly.
    pub fn column(self) -> &'static str {
        match self {
            Subject::Math => "math score",
            Subject::Reading => "reading score",
            Subject::Writing => "writing score",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Subject::Math => "Math Score",
            Subject::Reading => "Reading Score",
            Subject::Writing => "Writing Score",
        }
    }
}

pub fn subject_order() -> &'static [Subject] {
    &[Subject::Math, Subject::Reading, Subject::Writing]
}
