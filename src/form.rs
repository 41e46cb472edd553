//! Form state for the questionnaire

use crate::fields::{Field, FIELD_COUNT};

/// Current content of one input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldInput {
    Value(f64),
    /// Cleared by the user; kept distinct from zero until they type again
    Empty,
}

impl FieldInput {
    /// Parse what the user typed. Anything that is not a finite number counts as empty.
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => FieldInput::Value(v),
            _ => FieldInput::Empty,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            FieldInput::Value(v) => Some(*v),
            FieldInput::Empty => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Unknown questionnaire field: {0}")]
    UnknownField(String),
}

/// One input per registry field, indexed by `Field`
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    values: [FieldInput; FIELD_COUNT],
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            values: Field::ALL.map(|f| FieldInput::Value(f.default_value())),
        }
    }
}

impl FormState {
    pub fn get(&self, field: Field) -> FieldInput {
        self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, input: FieldInput) {
        self.values[field.index()] = input;
    }

    pub fn set_by_name(&mut self, name: &str, input: FieldInput) -> Result<(), FormError> {
        let field = Field::from_name(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.set(field, input);
        Ok(())
    }

    pub fn set_from_text(&mut self, field: Field, text: &str) {
        self.set(field, FieldInput::parse(text));
    }

    /// True when the field holds a number outside its bounds. Empty fields are not flagged.
    pub fn is_out_of_range(&self, field: Field) -> bool {
        self.get(field)
            .value()
            .is_some_and(|v| !field.bounds().contains(v))
    }

    /// Fields paired with their current input, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldInput)> + '_ {
        Field::ALL.iter().map(move |&f| (f, self.get(f)))
    }
}

/// Text shown in an input for a given value
pub fn format_input(input: FieldInput) -> String {
    match input {
        FieldInput::Value(v) => v.to_string(),
        FieldInput::Empty => String::new(),
    }
}

/// Drop characters a numeric input would not accept
pub fn sanitize_numeric(text: &mut String) {
    text.retain(|c| c.is_ascii_digit() || c == '.' || c == '-');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_registry() {
        let form = FormState::default();
        assert_eq!(form.get(Field::AnxietyLevel), FieldInput::Value(10.0));
        assert_eq!(form.get(Field::SelfEsteem), FieldInput::Value(15.0));
        assert_eq!(form.get(Field::MentalHealthHistory), FieldInput::Value(0.0));
        assert_eq!(form.get(Field::BloodPressure), FieldInput::Value(2.0));
        assert_eq!(form.get(Field::Bullying), FieldInput::Value(2.0));
    }

    #[test]
    fn text_parsing() {
        assert_eq!(FieldInput::parse("7"), FieldInput::Value(7.0));
        assert_eq!(FieldInput::parse(" 007 "), FieldInput::Value(7.0));
        assert_eq!(FieldInput::parse("-1"), FieldInput::Value(-1.0));
        assert_eq!(FieldInput::parse("2.5"), FieldInput::Value(2.5));
        assert_eq!(FieldInput::parse(""), FieldInput::Empty);
        assert_eq!(FieldInput::parse("   "), FieldInput::Empty);
        assert_eq!(FieldInput::parse("-"), FieldInput::Empty);
        assert_eq!(FieldInput::parse("inf"), FieldInput::Empty);
        assert_eq!(FieldInput::parse("NaN"), FieldInput::Empty);
    }

    #[test]
    fn clearing_keeps_empty_not_zero() {
        let mut form = FormState::default();
        form.set_from_text(Field::Depression, "");
        assert_eq!(form.get(Field::Depression), FieldInput::Empty);
        form.set_from_text(Field::Depression, "4");
        assert_eq!(form.get(Field::Depression), FieldInput::Value(4.0));
    }

    #[test]
    fn set_by_name_rejects_unknown_keys() {
        let mut form = FormState::default();
        form.set_by_name("safety", FieldInput::Value(5.0)).unwrap();
        assert_eq!(form.get(Field::Safety), FieldInput::Value(5.0));

        let err = form.set_by_name("happiness", FieldInput::Value(1.0)).unwrap_err();
        assert!(matches!(err, FormError::UnknownField(ref name) if name == "happiness"));
    }

    #[test]
    fn out_of_range_highlighting_ignores_empty() {
        let mut form = FormState::default();
        assert!(!form.is_out_of_range(Field::BloodPressure));
        form.set(Field::BloodPressure, FieldInput::Value(0.0));
        assert!(form.is_out_of_range(Field::BloodPressure));
        form.set(Field::BloodPressure, FieldInput::Empty);
        assert!(!form.is_out_of_range(Field::BloodPressure));
    }

    #[test]
    fn numeric_sanitizing() {
        let mut text = String::from("1a2.b-3 ");
        sanitize_numeric(&mut text);
        assert_eq!(text, "12.-3");
        assert_eq!(format_input(FieldInput::Value(3.0)), "3");
        assert_eq!(format_input(FieldInput::Value(2.5)), "2.5");
        assert_eq!(format_input(FieldInput::Empty), "");
    }
}
