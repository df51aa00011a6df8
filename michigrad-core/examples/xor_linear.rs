//! # XOR avec un modèle linéaire
//!
//! Entraîne un MLP 2 -> 2 -> 1 **sans** non-linéarité sur XOR (entrées
//! `{0, 1}²`, cibles `-1 / +1`). Un modèle linéaire ne peut pas séparer XOR :
//! la perte stagne autour de 4, ce qui est le résultat attendu.
//!
//! Le graphe de la dernière perte est écrit dans `xor_linear.dot`
//! (`dot -Tpng xor_linear.dot -o xor_linear.png`).
//!
//! ## Exécution
//! `RUST_LOG=debug cargo run --example xor_linear`

use michigrad_core::autograd::dot::to_dot;
use michigrad_core::model::Mlp;
use michigrad_core::nn::{MSELoss, Module, Reduction};
use michigrad_core::optim::{Optimizer, Sgd};
use michigrad_core::Graph;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;

const STEPS: usize = 50;
const LEARNING_RATE: f64 = 0.1;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(1337);
    let model = Mlp::new(&graph, 2, &[2, 1], false, &mut rng)?;
    let mut optimizer = Sgd::new(model.parameters(), LEARNING_RATE);
    let loss_fn = MSELoss::new(Reduction::Sum);
    println!("Modèle créé : {} paramètres", model.num_parameters());

    let inputs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
    let targets = [-1.0, 1.0, 1.0, -1.0];

    // Tout ce qui est créé après ce point appartient à une seule passe.
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
        println!("Étape {} | Perte : {:.4}", step + 1, loss.data());

        if step + 1 == STEPS {
            let final_predictions: Vec<f64> = predictions.iter().map(|p| p.data()).collect();
            println!("Prédictions finales : {:?}", final_predictions);
            std::fs::write("xor_linear.dot", to_dot(&loss)?)?;
            println!("Graphe écrit dans xor_linear.dot");
        }
        graph.rewind(checkpoint)?;
    }

    Ok(())
}
