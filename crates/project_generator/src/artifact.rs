use std::fmt;

/// Structural model field an artifact is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ModelInput {
    Routes,
    Controllers,
    Middleware,
    Services,
    SchemaTables,
    Dependencies,
}

impl fmt::Display for ModelInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelInput::Routes => "routes",
            ModelInput::Controllers => "controllers",
            ModelInput::Middleware => "middleware",
            ModelInput::Services => "services",
            ModelInput::SchemaTables => "database_tables",
            ModelInput::Dependencies => "dependencies",
        };
        f.write_str(name)
    }
}

/// One rendered file of the target project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the output directory, always with forward slashes
    pub path: String,
    pub contents: String,
    /// Empty for template-fixed artifacts
    pub inputs: &'static [ModelInput],
}

impl Artifact {
    pub fn new(path: &str, contents: String, inputs: &'static [ModelInput]) -> Self {
        Self {
            path: path.to_string(),
            contents,
            inputs,
        }
    }

    pub fn is_model_driven(&self) -> bool {
        !self.inputs.is_empty()
    }
}
