use chrono::NaiveDate;
use shared_types::{LegalBasisState, LegalKey};

/// Join the clauses of every set legal-basis code, in declaration order, and
/// name the subject the measures were applied to.
///
/// No set code means no force-related basis was recorded: the result is empty.
pub fn build_legal_basis_clause(
    legal_basis: &LegalBasisState,
    subject_name: &str,
    subject_birth_date: Option<NaiveDate>,
) -> String {
    let parts: Vec<&str> = LegalKey::ALL
        .into_iter()
        .filter(|key| legal_basis.get(key).copied().unwrap_or(false))
        .map(LegalKey::clause)
        .collect();

    if parts.is_empty() {
        return String::new();
    }

    let birth = subject_birth_date.map(|d| format!("{} р.н.", d.format("%d.%m.%Y")));
    let subject = [Some(subject_name.trim().to_string()), birth]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let clauses = parts.join(" та ");
    if subject.is_empty() {
        format!("{clauses}.")
    } else if subject.ends_with('.') {
        // "р.н." already closes the sentence.
        format!("{clauses} до {subject}")
    } else {
        format!("{clauses} до {subject}.")
    }
}
