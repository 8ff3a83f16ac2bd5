//! Configuration types deserialized from `glitch.toml`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// Default output directory for the manifest and generated files.
pub const DEFAULT_CODEGEN_ROOT: &str = ".glitch";

/// The top-level configuration parsed from `glitch.toml`.
#[derive(Debug, Deserialize)]
pub struct GlitchConfig {
    /// Project metadata.
    pub project: ProjectMeta,
    /// Where the GraphQL schema lives.
    pub schema: SchemaConfig,
    /// Which files hold operation and fragment documents.
    pub documents: DocumentsConfig,
    /// Output settings.
    #[serde(default)]
    pub codegen: CodegenConfig,
}

/// Project metadata.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name, shown in CLI status lines.
    pub name: String,
}

/// Location of the schema definition.
#[derive(Debug, Deserialize)]
pub struct SchemaConfig {
    /// Path to the schema SDL file, relative to the project directory.
    pub path: String,
}

/// Glob patterns selecting document files.
#[derive(Debug, Deserialize)]
pub struct DocumentsConfig {
    /// Patterns of files to collect, relative to the project directory.
    ///
    /// Accepts either a single string or a list of strings.
    #[serde(deserialize_with = "deserialize_string_or_vec")]
    pub include: Vec<String>,
    /// Patterns of files to skip even if an include pattern matches.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub exclude: Vec<String>,
}

/// Output settings.
#[derive(Debug, Deserialize)]
pub struct CodegenConfig {
    /// Output directory (holds the `.hash` manifest), relative to the project.
    #[serde(default = "default_codegen_root")]
    pub root: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            root: default_codegen_root(),
        }
    }
}

fn default_codegen_root() -> String {
    DEFAULT_CODEGEN_ROOT.to_string()
}

/// Deserializes a field that can be either a single string or a list of strings.
fn deserialize_string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut vec = Vec::new();
            while let Some(val) = seq.next_element::<String>()? {
                vec.push(val);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}
