use crate::input::RawScores;

pub const FIRST_STUDENT_NUMBER: usize = 1001;

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub student_id: Vec<String>,
    pub average_score: Vec<f64>,
}

pub fn run_stage1(raw: &[RawScores]) -> Stage1Output {
    let mut student_id = Vec::with_capacity(raw.len());
    let mut average = Vec::with_capacity(raw.len());
    for (row, scores) in raw.iter().enumerate() {
        student_id.push(student_id_for_row(row));
        average.push(average_score(scores));
    }
    Stage1Output {
        student_id,
        average_score: average,
    }
}

pub fn student_id_for_row(row: usize) -> String {
    format!("STD_{}", FIRST_STUDENT_NUMBER + row)
}

pub fn average_score(scores: &RawScores) -> f64 {
    (scores.math_score + scores.reading_score + scores.writing_score) / 3.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_identity.rs"]
mod tests;
