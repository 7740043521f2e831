//! Documented constructs.

use serde::{Deserialize, Serialize};

/// Name of an object's initializer method.
pub const INIT_METHOD: &str = "__init";

/// A documented object: its fields and methods.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDoc {
    name: String,
    description: String,
    fields: Vec<FieldDoc>,
    methods: Vec<FunctionDoc>,
}

impl ObjectDoc {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        fields: Vec<FieldDoc>,
        methods: Vec<FunctionDoc>,
    ) -> Self {
        ObjectDoc {
            name: name.into(),
            description: description.into(),
            fields,
            methods,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn fields(&self) -> &[FieldDoc] {
        &self.fields
    }

    pub fn methods(&self) -> &[FunctionDoc] {
        &self.methods
    }

    /// The `__init` method, if the object declares one.
    pub fn init_method(&self) -> Option<&FunctionDoc> {
        self.methods.iter().find(|method| method.name == INIT_METHOD)
    }

    /// Methods other than the initializer, in declaration order.
    pub fn other_methods(&self) -> impl Iterator<Item = &FunctionDoc> {
        self.methods.iter().filter(|method| method.name != INIT_METHOD)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A field with its declared type and optional default value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDoc {
    name: String,
    description: String,
    type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_value: Option<String>,
}

impl FieldDoc {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        type_name: impl Into<String>,
        default_value: Option<String>,
    ) -> Self {
        FieldDoc {
            name: name.into(),
            description: description.into(),
            type_name: type_name.into(),
            default_value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}

/// A `# + name - description` entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDoc {
    pub name: String,
    pub description: String,
}

/// A documented function or method.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDoc {
    name: String,
    description: String,
    parameters: Vec<ParameterDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    return_description: Option<String>,
}

impl FunctionDoc {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<ParameterDoc>,
        return_description: Option<String>,
    ) -> Self {
        FunctionDoc {
            name: name.into(),
            description: description.into(),
            parameters,
            return_description,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &[ParameterDoc] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterDoc> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn return_description(&self) -> Option<&str> {
        self.return_description.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
