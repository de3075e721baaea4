use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FieldState {
    value: String,
    error: Option<String>,
    shake_seq: u64,
}

impl FieldState {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces any existing error annotation. The shake sequence is bumped
    /// every time so a re-shown error restarts the animation.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.shake_seq = self.shake_seq.wrapping_add(1);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn shake_seq(&self) -> u64 {
        self.shake_seq
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.error = None;
    }
}

#[derive(Debug, Clone)]
pub struct FormFields {
    fields: IndexMap<Field, FieldState>,
}

impl FormFields {
    pub fn new() -> Self {
        let mut fields = IndexMap::new();
        for field in Field::ALL {
            fields.insert(field, FieldState::default());
        }
        Self { fields }
    }

    pub fn get(&self, field: Field) -> &FieldState {
        &self.fields[&field]
    }

    pub fn get_mut(&mut self, field: Field) -> &mut FieldState {
        &mut self.fields[&field]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldState)> {
        self.fields.iter().map(|(field, state)| (*field, state))
    }

    pub fn clear_values(&mut self) {
        for state in self.fields.values_mut() {
            state.reset();
        }
    }

    pub fn clear_errors(&mut self) {
        for state in self.fields.values_mut() {
            state.clear_error();
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fields.values().any(|state| state.error.is_some())
    }
}

impl Default for FormFields {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, FormFields};

    #[test]
    fn showing_an_error_twice_replaces_it() {
        let mut fields = FormFields::new();
        fields.get_mut(Field::Name).show_error("first");
        fields.get_mut(Field::Name).show_error("second");
        assert_eq!(fields.get(Field::Name).error(), Some("second"));
    }

    #[test]
    fn reshowing_an_error_bumps_the_shake_sequence() {
        let mut fields = FormFields::new();
        fields.get_mut(Field::Name).show_error("oops");
        let first = fields.get(Field::Name).shake_seq();
        fields.get_mut(Field::Name).show_error("oops");
        assert!(fields.get(Field::Name).shake_seq() > first);
    }

    #[test]
    fn clearing_an_already_clear_field_is_a_noop() {
        let mut fields = FormFields::new();
        fields.get_mut(Field::Email).clear_error();
        assert!(!fields.has_errors());
    }

    #[test]
    fn clear_values_also_drops_errors() {
        let mut fields = FormFields::new();
        fields.get_mut(Field::Message).set_value("hello".to_string());
        fields.get_mut(Field::Message).show_error("too short");
        fields.clear_values();
        assert_eq!(fields.get(Field::Message).value(), "");
        assert!(!fields.has_errors());
    }
}
