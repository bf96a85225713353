use super::field::Field;

/// Default donation amount shown when the form opens.
pub const DEFAULT_AMOUNT: &str = "100";

/// Raw, unvalidated values typed into the donation form.
///
/// Values are stored verbatim; trimming and parsing happen during
/// validation and never mutate the stored text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub amount: String,
    pub pan: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            amount: DEFAULT_AMOUNT.to_string(),
            pan: String::new(),
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Amount => &self.amount,
            Field::Pan => &self.pan,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Amount => &mut self.amount,
            Field::Pan => &mut self.pan,
        };
        *slot = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_form_starts_with_default_amount() {
        let form = FormState::new();
        assert_eq!(form.amount, "100");
        assert!(form.name.is_empty());
        assert!(form.pan.is_empty());
    }

    #[test]
    fn set_stores_value_verbatim() {
        let mut form = FormState::new();
        form.set(Field::Name, "  Asha  ");
        form.set(Field::Amount, "1,000");
        assert_eq!(form.get(Field::Name), "  Asha  ");
        assert_eq!(form.get(Field::Amount), "1,000");
    }
}
