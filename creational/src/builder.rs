//! Step-by-step construction of a [`User`] value.

use serde::{Deserialize, Serialize};

/// Value produced by [`UserBuilder::build`].
///
/// Fields never set on the builder keep their zero value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Accumulates optional user fields. Setters overwrite, `build` snapshots.
#[derive(Clone, Debug, Default)]
pub struct UserBuilder {
    name: String,
    email: String,
    age: i32,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn email<S: Into<String>>(&mut self, email: S) -> &mut Self {
        self.email = email.into();
        self
    }

    pub fn age(&mut self, age: i32) -> &mut Self {
        self.age = age;
        self
    }

    /// Return the current field values as an owned [`User`].
    ///
    /// The builder stays usable; later setter calls do not affect users
    /// already built.
    pub fn build(&self) -> User {
        User {
            name: self.name.clone(),
            email: self.email.clone(),
            age: self.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_builder_yields_zero_values() {
        let user = UserBuilder::new().build();
        assert_eq!(user, User::default());
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
        assert_eq!(user.age, 0);
    }

    #[test]
    fn fully_specified_user() {
        let user = UserBuilder::new()
            .name("John Doe")
            .email("john@example.com")
            .age(30)
            .build();
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.age, 30);
    }

    #[test]
    fn partial_specification_leaves_email_empty() {
        let user = UserBuilder::new().name("Alice").age(25).build();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "");
        assert_eq!(user.age, 25);
    }

    #[test]
    fn later_setter_overrides_earlier() {
        let user = UserBuilder::new()
            .name("Bob")
            .email("bob@builder.com")
            .age(40)
            .name("Robert")
            .build();
        assert_eq!(user.name, "Robert");
        assert_eq!(user.email, "bob@builder.com");
        assert_eq!(user.age, 40);
    }

    #[test]
    fn accepts_empty_and_negative_values() {
        let user = UserBuilder::new().name("").email("").age(-7).build();
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
        assert_eq!(user.age, -7);
    }

    #[test]
    fn builds_are_independent_snapshots() {
        let mut builder = UserBuilder::new();
        builder.name("first").age(1);
        let first = builder.build();

        builder.name("second").email("s@example.com");
        let second = builder.build();

        assert_eq!(first.name, "first");
        assert_eq!(first.email, "");
        assert_eq!(second.name, "second");
        assert_eq!(second.email, "s@example.com");
        assert_eq!(second.age, 1);
    }

    #[test]
    fn user_serializes_all_fields() {
        let user = UserBuilder::new().name("Ann").email("ann@e.com").age(3).build();
        let json = serde_json::to_value(&user).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"name": "Ann", "email": "ann@e.com", "age": 3})
        );
    }

    #[derive(Clone, Debug)]
    enum Step {
        Name(String),
        Email(String),
        Age(i32),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            ".*".prop_map(Step::Name),
            ".*".prop_map(Step::Email),
            any::<i32>().prop_map(Step::Age),
        ]
    }

    proptest! {
        #[test]
        fn last_write_wins_for_every_field(steps in proptest::collection::vec(step(), 0..16)) {
            let mut builder = UserBuilder::new();
            let mut expected = User::default();
            for s in &steps {
                match s {
                    Step::Name(v) => {
                        builder.name(v.as_str());
                        expected.name = v.clone();
                    }
                    Step::Email(v) => {
                        builder.email(v.as_str());
                        expected.email = v.clone();
                    }
                    Step::Age(v) => {
                        builder.age(*v);
                        expected.age = *v;
                    }
                }
            }
            prop_assert_eq!(builder.build(), expected);
        }
    }
}
