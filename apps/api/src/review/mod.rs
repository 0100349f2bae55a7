// Review: the resume score heuristic and the wizard step gate.

pub mod handlers;
pub mod score;
pub mod text;
pub mod validation;
