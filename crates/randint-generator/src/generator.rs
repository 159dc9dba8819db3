//! The reading generator: seeded sampling and command dispatch.

use crate::command::{batch_size_error, Command, CommandError, MAX_BATCH_SIZE};
use crate::readings::{Batch, Readings};
use crate::sampling::sample_int;
use rand::rngs::StdRng;
use rand::SeedableRng;
use randint_core::{ConfigError, GeneratorConfig};
use serde_json::{Map, Value};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

/// Configuration and RNG, always replaced together.
struct GeneratorState {
    config: GeneratorConfig,
    rng: StdRng,
}

impl GeneratorState {
    fn new(config: GeneratorConfig) -> Self {
        let rng = seeded_rng(config.seed);
        Self { config, rng }
    }

    /// One full sample: a value per reading name.
    fn draw(&mut self) -> Readings {
        let GeneratorState { config, rng } = self;
        let mut readings = Readings::with_capacity(config.num_readings);
        for name in &config.reading_names {
            readings.push(name, sample_int(rng, config.dtype, config.low, config.high));
        }
        readings
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Random integer reading generator.
///
/// Each instance owns its RNG; instances never share random state. All
/// operations take `&self` and serialize on an internal mutex, so a generator
/// can be shared across threads and `reseed`/`reconfigure` are linearizable
/// with sampling.
pub struct ReadingGenerator {
    name: String,
    state: Mutex<GeneratorState>,
}

impl ReadingGenerator {
    /// Create a generator from an already-built configuration.
    pub fn new(name: impl Into<String>, config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let name = name.into();
        log_configured(&name, &config);
        Ok(Self {
            name,
            state: Mutex::new(GeneratorState::new(config)),
        })
    }

    /// Create a generator from a raw attribute map.
    pub fn from_attributes(
        name: impl Into<String>,
        attributes: &Map<String, Value>,
    ) -> Result<Self, ConfigError> {
        Self::new(name, GeneratorConfig::from_attributes(attributes)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A snapshot of the current configuration.
    pub fn config(&self) -> GeneratorConfig {
        self.lock().config.clone()
    }

    /// Produce one value per configured reading name.
    pub fn get_readings(&self) -> Readings {
        let readings = self.lock().draw();
        debug!("Generated readings for '{}': {:?}", self.name, readings.values());
        readings
    }

    /// Draw `size` samples under a single lock acquisition.
    ///
    /// Each element is exactly what [`ReadingGenerator::get_readings`] would
    /// have returned at that point in the sequence. `size` must be between 1
    /// and [`MAX_BATCH_SIZE`].
    pub fn generate_batch(&self, size: usize) -> Result<Batch, CommandError> {
        if !(1..=MAX_BATCH_SIZE).contains(&size) {
            return Err(batch_size_error(size));
        }

        let mut state = self.lock();
        let batch = if state.config.num_readings == 1 {
            let reading_name = state.config.reading_names[0].clone();
            let values = (0..size).map(|_| state.draw().values()[0]).collect();
            Batch::single(reading_name, values)
        } else {
            let reading_names = state.config.reading_names.clone();
            let rows = (0..size).map(|_| state.draw()).collect();
            Batch::multi(reading_names, rows)
        };
        drop(state);

        debug!("Generated batch of {} for '{}'", size, self.name);
        Ok(batch)
    }

    /// Replace the RNG with one seeded from `seed`.
    ///
    /// The stored configuration records the new seed.
    pub fn reseed(&self, seed: u64) {
        let mut state = self.lock();
        state.rng = StdRng::seed_from_u64(seed);
        state.config.seed = Some(seed);
        drop(state);

        info!("Reseeded random generator '{}' with seed: {}", self.name, seed);
    }

    /// Apply a new raw attribute map to this generator.
    ///
    /// The new configuration is fully validated before anything is replaced;
    /// on error the previous configuration and RNG stay in place.
    pub fn reconfigure(&self, attributes: &Map<String, Value>) -> Result<(), ConfigError> {
        let config = GeneratorConfig::from_attributes(attributes)?;
        log_configured(&self.name, &config);
        *self.lock() = GeneratorState::new(config);
        Ok(())
    }

    /// Execute a command map and return its response.
    pub fn do_command(&self, command: &Map<String, Value>) -> Result<Map<String, Value>, CommandError> {
        let command = Command::parse(command)?;
        debug!("Executing command '{}' on '{}'", command.name(), self.name);

        let response = match command {
            Command::GetConfig => self.config().to_attributes(),
            Command::Reseed { seed } => {
                self.reseed(seed);
                let mut response = Map::new();
                response.insert("status".to_string(), Value::from("reseeded"));
                response.insert("seed".to_string(), Value::from(seed));
                response
            }
            Command::GenerateBatch { size } => self.generate_batch(size)?.to_response(),
        };
        Ok(response)
    }

    fn lock(&self) -> MutexGuard<'_, GeneratorState> {
        // Every critical section leaves the state consistent, so a poisoned
        // lock is still safe to use.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn log_configured(name: &str, config: &GeneratorConfig) {
    info!(
        "Configured randint generator '{}': low={}, high={}, num_readings={}, reading_names={:?}, dtype={}, seed={:?}",
        name,
        config.low,
        config.high,
        config.num_readings,
        config.reading_names,
        config.dtype,
        config.seed
    );
}
