//! Raw dataset records → `JobListing` view models.

use crate::board::classifier::classify;
use crate::models::job::{Category, JobListing, RawJobRecord, Skill};

/// Normalizes every record, preserving order. One listing per record.
pub fn transform(records: &[RawJobRecord]) -> Vec<JobListing> {
    records.iter().map(to_listing).collect()
}

/// Builds the listing for a single record.
///
/// Skill order is role, level, languages, tools. Level is never classified.
pub fn to_listing(record: &RawJobRecord) -> JobListing {
    let mut skills = Vec::with_capacity(2 + record.languages.len() + record.tools.len());
    skills.push(Skill::new(&record.role, classify(&record.role)));
    skills.push(Skill::new(&record.level, Category::Other));
    skills.extend(
        record
            .languages
            .iter()
            .chain(record.tools.iter())
            .map(|name| Skill::new(name, classify(name))),
    );

    JobListing {
        id: record.id.to_string(),
        company_name: record.company.clone(),
        company_logo: record.logo.clone(),
        position: record.position.clone(),
        posted_at: record.posted_at.clone(),
        job_type: record.contract.clone(),
        location: record.location.clone(),
        is_new: record.is_new,
        is_featured: record.is_featured,
        skills,
    }
}
