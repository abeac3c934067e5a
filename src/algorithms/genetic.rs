//! Toy genetic algorithm step generator.
//!
//! Evolves a population on the fixed 1-D fitness landscape
//! `f(x) = 4x(1 - x)` over `[0, 1]` (unimodal, peak 1.0 at x = 0.5) and
//! records one snapshot per generation. Selection keeps the top half,
//! crossover averages two parents, and mutation perturbs the child with
//! 30% probability.

use serde::{Deserialize, Serialize};

use crate::engine::rng::VizRng;
use crate::engine::Trace;
use crate::error::{VizError, VizResult};

/// Mutation probability per child.
const MUTATION_RATE: f64 = 0.3;
/// Half-width of the uniform mutation delta.
const MUTATION_SPAN: f64 = 0.05;

/// A candidate solution and its fitness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// Candidate value in `[0, 1]`.
    pub x: f64,
    /// Fitness, always `4x(1 - x)` of this individual's own `x`.
    pub fitness: f64,
}

impl Individual {
    /// Create an individual, computing its fitness from `x`.
    #[must_use]
    pub fn new(x: f64) -> Self {
        Self {
            x,
            fitness: fitness(x),
        }
    }
}

/// One generation of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStep {
    /// Generation number, 0 for the initial population.
    pub generation: u32,
    /// Population in insertion order (not sorted).
    pub population: Vec<Individual>,
    /// Highest fitness in this population.
    pub best_fitness: f64,
}

/// The fixed fitness landscape: `f(x) = 4x(1 - x)`.
#[must_use]
pub fn fitness(x: f64) -> f64 {
    4.0 * x * (1.0 - x)
}

fn best_fitness(population: &[Individual]) -> f64 {
    population
        .iter()
        .map(|ind| ind.fitness)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Generate a random initial population of the given size.
#[must_use]
pub fn random_population(size: usize, rng: &mut VizRng) -> Vec<Individual> {
    (0..size).map(|_| Individual::new(rng.gen_f64())).collect()
}

/// Generate per-generation snapshots of a genetic algorithm run.
///
/// Generation 0 is the initial population verbatim. Each subsequent
/// generation sorts by descending fitness, keeps the top `max(1, n / 2)`
/// as the parent pool, and rebuilds a same-size population by repeatedly
/// sampling two parents uniformly with replacement (self-pairing
/// allowed), averaging their `x`, mutating by a uniform delta in
/// `[-0.05, 0.05]` with 30% probability, clamping to `[0, 1]`, and
/// recomputing fitness. Population size is invariant; best fitness is not
/// guaranteed monotonic per run.
///
/// # Errors
///
/// Returns [`VizError::EmptyPopulation`] if `initial` is empty.
pub fn genetic_steps(
    initial: &[Individual],
    generations: u32,
    rng: &mut VizRng,
) -> VizResult<Trace<GenerationStep>> {
    if initial.is_empty() {
        return Err(VizError::EmptyPopulation);
    }

    let mut steps = Vec::with_capacity(generations as usize + 1);
    let mut population = initial.to_vec();
    steps.push(GenerationStep {
        generation: 0,
        population: population.clone(),
        best_fitness: best_fitness(&population),
    });

    for generation in 1..=generations {
        let mut ranked = population.clone();
        ranked.sort_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let parent_count = (ranked.len() / 2).max(1);
        let parents = &ranked[..parent_count];

        let mut next = Vec::with_capacity(population.len());
        while next.len() < population.len() {
            let parent1 = parents[rng.gen_bounded(parent_count)];
            let parent2 = parents[rng.gen_bounded(parent_count)];
            let mut child_x = (parent1.x + parent2.x) / 2.0;
            if rng.chance(MUTATION_RATE) {
                child_x += rng.gen_range_f64(-MUTATION_SPAN, MUTATION_SPAN);
            }
            child_x = child_x.clamp(0.0, 1.0);
            next.push(Individual::new(child_x));
        }

        population = next;
        steps.push(GenerationStep {
            generation,
            population: population.clone(),
            best_fitness: best_fitness(&population),
        });
    }

    Ok(Trace::new(steps))
}
