//! Board rendering — turns controller state into serializable cards and chips.
//! Styling is left to the client; chips carry a palette `tone` name per category.

pub mod logo;

use serde::Serialize;

use crate::board::ListingController;
use crate::models::job::{Category, JobListing, Skill};

pub use logo::{LogoResolver, LogoView};

pub const EMPTY_TITLE: &str = "No matching jobs found";
pub const EMPTY_HINT: &str = "Try adjusting your filters or search terms";

#[derive(Debug, Clone, Serialize)]
pub struct SkillChip {
    pub name: String,
    pub category: Category,
    pub tone: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingCard {
    pub id: String,
    pub company: String,
    pub position: String,
    /// `postedAt • contract • location`
    pub meta: String,
    pub badges: Vec<&'static str>,
    pub logo: LogoView,
    pub skills: Vec<SkillChip>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub listings: Vec<ListingCard>,
    pub filters: Vec<String>,
    pub search: String,
    pub total: usize,
    pub visible: usize,
    pub can_clear: bool,
    pub empty_state: Option<EmptyState>,
}

/// Palette name for a chip of the given category.
pub fn tone_for(category: Category) -> &'static str {
    match category {
        Category::Frontend => "teal",
        Category::Backend => "blue",
        Category::Fullstack => "purple",
        Category::Language => "green",
        Category::Framework => "orange",
        Category::Other => "gray",
    }
}

fn chip(skill: &Skill) -> SkillChip {
    SkillChip {
        name: skill.name.clone(),
        category: skill.category,
        tone: tone_for(skill.category),
    }
}

pub fn render_card(listing: &JobListing, logos: &LogoResolver) -> ListingCard {
    let mut badges = Vec::new();
    if listing.is_new {
        badges.push("NEW!");
    }
    if listing.is_featured {
        badges.push("FEATURED");
    }

    ListingCard {
        id: listing.id.clone(),
        company: listing.company_name.clone(),
        position: listing.position.clone(),
        meta: format!(
            "{} • {} • {}",
            listing.posted_at, listing.job_type, listing.location
        ),
        badges,
        logo: logos.render(listing),
        skills: listing.skills.iter().map(chip).collect(),
    }
}

pub fn render_board(controller: &ListingController, logos: &LogoResolver) -> BoardView {
    let visible = controller.visible();
    let state = controller.state();

    BoardView {
        listings: visible.iter().map(|l| render_card(l, logos)).collect(),
        filters: state.filters().map(str::to_string).collect(),
        search: state.search().to_string(),
        total: controller.all().len(),
        visible: visible.len(),
        can_clear: controller.can_clear(),
        empty_state: visible.is_empty().then_some(EmptyState {
            title: EMPTY_TITLE,
            hint: EMPTY_HINT,
        }),
    }
}
