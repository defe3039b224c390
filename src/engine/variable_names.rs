use crate::basic_types::HashMap;
use crate::variables::VariableId;

#[derive(Debug, Default)]
pub(crate) struct VariableNames {
    names: HashMap<VariableId, String>,
    variables_by_name: HashMap<String, VariableId>,
}

impl VariableNames {
    /// Get a variable by its name.
    pub(crate) fn get_variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variables_by_name.get(name).copied()
    }

    /// Get the name associated with a variable.
    pub(crate) fn get_name(&self, variable: VariableId) -> Option<&str> {
        self.names.get(&variable).map(|s| s.as_str())
    }

    /// Add a name to the variable. This will override the existing name if it exists.
    pub(crate) fn add(&mut self, variable: VariableId, name: String) {
        if let Some(previous) = self.names.insert(variable, name.clone()) {
            let _ = self.variables_by_name.remove(&previous);
        }
        let _ = self.variables_by_name.insert(name, variable);
    }

    /// The name of the variable if it has one, otherwise its id.
    pub(crate) fn describe(&self, variable: VariableId) -> String {
        self.get_name(variable)
            .map_or_else(|| variable.to_string(), str::to_owned)
    }
}
