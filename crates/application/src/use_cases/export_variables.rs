//! Export variables use case

use crate::ports::{StoreError, VariableStore};
use crate::resolution::serialize;

/// Output containing the rendered declarations of a project.
pub struct ExportVariablesOutput {
    /// `NAME="VALUE" # Scope` lines.
    pub text: String,
    /// Number of declarations rendered.
    pub count: usize,
}

/// Renders every declaration a project sees, including inherited ones.
pub struct ExportVariables<S> {
    store: S,
}

impl<S: VariableStore> ExportVariables<S> {
    /// Creates a new `ExportVariables` use case.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Executes the use case.
    ///
    /// # Arguments
    /// * `project` - Project permalink
    ///
    /// # Errors
    /// Returns an error if the project or the scope catalog cannot be loaded.
    pub async fn execute(&self, project: &str) -> Result<ExportVariablesOutput, StoreError> {
        let variables = self.store.nested_variables(project).await?;
        let scopes = self.store.scopes().await?;

        Ok(ExportVariablesOutput {
            text: serialize(&variables, &scopes),
            count: variables.len(),
        })
    }
}
