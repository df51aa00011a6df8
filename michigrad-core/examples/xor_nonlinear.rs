//! # XOR avec un MLP non-linéaire
//!
//! `Linear(2, 2) -> Tanh -> Linear(2, 1) -> Tanh` sur les entrées `{-1, 1}²`,
//! cibles `-1 / +1`. Avec tanh en sortie, la perte (somme des carrés) doit
//! descendre vers 0.
//!
//! Le graphe de la dernière perte est écrit dans `xor_nonlinear.dot`.
//!
//! ## Exécution
//! `cargo run --example xor_nonlinear`

use michigrad_core::autograd::dot::to_dot;
use michigrad_core::model::Sequential;
use michigrad_core::nn::{Linear, MSELoss, Module, Reduction, Tanh};
use michigrad_core::optim::{Optimizer, Sgd};
use michigrad_core::Graph;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;

const STEPS: usize = 100;
const LEARNING_RATE: f64 = 0.1;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(7);
    let mut model = Sequential::new();
    model.add_module("linear1", Box::new(Linear::new(&graph, 2, 2, &mut rng)?));
    model.add_module("tanh1", Box::new(Tanh));
    model.add_module("linear2", Box::new(Linear::new(&graph, 2, 1, &mut rng)?));
    model.add_module("tanh2", Box::new(Tanh));

    for (name, param) in model.named_parameters() {
        println!("{:<28} {:+.4}", name, param.data());
    }

    let mut optimizer = Sgd::new(model.parameters(), LEARNING_RATE);
    let loss_fn = MSELoss::new(Reduction::Sum);
    let inputs = [[-1.0, -1.0], [-1.0, 1.0], [1.0, -1.0], [1.0, 1.0]];
    let targets = [-1.0, 1.0, 1.0, -1.0];

    println!("Entraînement de XOR avec un MLP non-linéaire...");
    let checkpoint = graph.checkpoint();
    for step in 0..STEPS {
        let mut predictions = Vec::with_capacity(inputs.len());
        for x in &inputs {
            predictions.extend(model.forward(&graph.values(x))?);
        }
        let loss = loss_fn.calculate(&predictions, &graph.values(&targets))?;

        optimizer.zero_grad()?;
        loss.backward()?;
        optimizer.step()?;

        if step % 10 == 0 {
            println!("Étape {} | Perte : {:.4}", step, loss.data());
        }
        if step + 1 == STEPS {
            println!("Perte finale : {:.4}", loss.data());
            let final_predictions: Vec<f64> = predictions.iter().map(|p| p.data()).collect();
            println!("Prédictions finales : {:?}", final_predictions);
            std::fs::write("xor_nonlinear.dot", to_dot(&loss)?)?;
        }
        graph.rewind(checkpoint)?;
    }

    Ok(())
}
