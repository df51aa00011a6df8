use crate::error::MichigradError;
use crate::nn::module::Module;
use crate::value::Value;
use std::fmt;

/// Chains modules: the outputs of each one are the inputs of the next.
#[derive(Debug, Default)]
pub struct Sequential {
    modules: Vec<(String, Box<dyn Module>)>,
}

impl Sequential {
    pub fn new() -> Self {
        Sequential {
            modules: Vec::new(),
        }
    }

    /// Builds a container whose modules are named `"0"`, `"1"`, ...
    pub fn from_modules(modules: Vec<Box<dyn Module>>) -> Self {
        Sequential {
            modules: modules
                .into_iter()
                .enumerate()
                .map(|(i, m)| (i.to_string(), m))
                .collect(),
        }
    }

    /// Appends `module`; it runs after every module already added.
    pub fn add_module(&mut self, name: &str, module: Box<dyn Module>) {
        self.modules.push((name.to_string(), module));
    }

    pub fn named_children(&self) -> Vec<(&str, &dyn Module)> {
        self.modules
            .iter()
            .map(|(name, m)| (name.as_str(), m.as_ref()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl fmt::Display for Sequential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequential([")?;
        for (i, (_, module)) in self.modules.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", module)?;
        }
        write!(f, "])")
    }
}

impl Module for Sequential {
    /// An empty container returns its inputs unchanged.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MichigradError> {
        let mut current = inputs.to_vec();
        for (_, module) in &self.modules {
            current = module.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Value> {
        self.modules
            .iter()
            .flat_map(|(_, m)| m.parameters())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (name, module) in &self.modules {
            for (param_name, param) in module.named_parameters() {
                params.push((format!("{}.{}", name, param_name), param));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.modules.iter().map(|(_, m)| m.as_ref()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::graph::Graph;
    use crate::nn::layers::{Linear, ReLU};
    use crate::nn::neuron::Neuron;

    fn build(graph: &Graph) -> Result<Sequential, MichigradError> {
        let first = Linear::from_neurons(vec![
            Neuron::from_values(graph.values(&[1.0, -1.0]), graph.value(0.0)),
            Neuron::from_values(graph.values(&[-1.0, 1.0]), graph.value(0.0)),
        ])?;
        let second = Linear::from_neurons(vec![Neuron::from_values(
            graph.values(&[1.0, 1.0]),
            graph.value(0.5),
        )])?;
        Ok(Sequential::from_modules(vec![
            Box::new(first),
            Box::new(ReLU),
            Box::new(second),
        ]))
    }

    #[test]
    fn test_sequential_forward() -> Result<(), MichigradError> {
        let graph = Graph::new();
        let model = build(&graph)?;
        assert_eq!(model.len(), 3);
        // relu(3 - 1) + relu(1 - 3) + 0.5
        let out = model.forward(&graph.values(&[3.0, 1.0]))?;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].data(), 2.5);
        Ok(())
    }

    #[test]
    fn test_sequential_parameters() -> Result<(), MichigradError> {
        let graph = Graph::new();
        let model = build(&graph)?;
        assert_eq!(model.num_parameters(), 6 + 3);
        assert_eq!(model.children().len(), 3);
        let names: Vec<String> = model
            .named_parameters()
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(names[0], "0.neurons.0.weight.0");
        assert_eq!(names[8], "2.neurons.0.bias");
        assert_eq!(model.named_children()[1].0, "1");
        assert_eq!(
            model.to_string(),
            "Sequential([LinearLayer([LinearNeuron(2), LinearNeuron(2)]), ReLU(), LinearLayer([LinearNeuron(2)])])"
        );
        assert_eq!(Sequential::new().to_string(), "Sequential([])");
        Ok(())
    }

    #[test]
    fn test_sequential_add_module_and_empty() -> Result<(), MichigradError> {
        let graph = Graph::new();
        let mut model = Sequential::new();
        assert!(model.is_empty());
        let inputs = graph.values(&[-2.0]);
        let out = model.forward(&inputs)?;
        assert!(out[0].ptr_eq(&inputs[0]));

        model.add_module("act", Box::new(ReLU));
        assert_eq!(model.forward(&inputs)?[0].data(), 0.0);
        assert_eq!(model.named_children()[0].0, "act");
        Ok(())
    }
}
