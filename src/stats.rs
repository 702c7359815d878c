use std::path::Path;

use crate::domain::population::Population;
use crate::error::Result;

/// Column order of the fitness summary file.
const HEADERS: [&str; 5] = ["Member", "SuccessfulWorkflows", "GrantedProcessing", "GrantedBandwidth", "DelaySum"];

/// Writes one semicolon-separated row per population member.
///
/// The file carries the per-member fitness breakdown so runs can be compared
/// offline without re-running the sampler.
pub fn write_fitness_csv(population: &Population, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_path(path)?;

    writer.write_record(HEADERS)?;

    for (index, member) in population.members.iter().enumerate() {
        writer.write_record(&[
            index.to_string(),
            member.chromosome.successful_placements().to_string(),
            member.fitness.granted_processing.to_string(),
            member.fitness.granted_bandwidth.to_string(),
            member.fitness.delay_sum.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
