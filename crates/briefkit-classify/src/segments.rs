//! Hand-authored audience segments per (industry, journey type).
//!
//! Segment order matters: the first entry is the primary segment downstream.

use briefkit_core::{AudienceSegment, AwarenessLevel, BuyingStage, JourneyType};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Looks up the authored segments for an industry and journey type. `None`
/// means the caller should synthesize a generic default segment instead.
pub(crate) fn for_industry(industry: &str, journey_type: JourneyType) -> Option<Vec<AudienceSegment>> {
    let segments = match (industry, journey_type) {
        ("financial services", JourneyType::B2C) => {
            vec![first_time_savers(), active_savers()]
        }
        ("financial services", JourneyType::B2B) => vec![hr_benefits_managers()],
        ("saas", JourneyType::B2B) => vec![smb_decision_makers(), enterprise_champions()],
        ("saas", JourneyType::B2C) => vec![productivity_seekers()],
        ("e-commerce", JourneyType::B2C) => vec![value_seekers(), convenience_buyers()],
        ("grant management", JourneyType::B2B) => {
            vec![grant_making_organizations(), community_organizations()]
        }
        ("grant management", JourneyType::B2C) => vec![grant_productivity_seekers()],
        _ => return None,
    };
    Some(segments)
}

fn first_time_savers() -> AudienceSegment {
    let mut s = AudienceSegment::new("First-Time Savers", JourneyType::B2C);
    s.description = "Individuals new to saving/investing".to_string();
    s.age_range = "25-35".to_string();
    s.awareness_level = AwarenessLevel::ProblemAware;
    s.buying_stage = BuyingStage::Consideration;
    s.pain_points = strings(&[
        "Don't know where to start",
        "Confused by options",
        "Worried about risk",
    ]);
    s.goals = strings(&[
        "Build savings habit",
        "Understand their options",
        "Feel financially secure",
    ]);
    s.motivations = strings(&["Future security", "Life milestones"]);
    s
}

fn active_savers() -> AudienceSegment {
    let mut s = AudienceSegment::new("Active Savers", JourneyType::B2C);
    s.description = "People already saving but looking for better options".to_string();
    s.age_range = "30-50".to_string();
    s.awareness_level = AwarenessLevel::SolutionAware;
    s.buying_stage = BuyingStage::Decision;
    s.pain_points = strings(&["Poor returns", "Limited flexibility", "High fees"]);
    s.goals = strings(&["Better returns", "Tax efficiency", "Consolidate savings"]);
    s.motivations = strings(&["Optimization", "Efficiency"]);
    s
}

fn hr_benefits_managers() -> AudienceSegment {
    let mut s = AudienceSegment::new("HR & Benefits Managers", JourneyType::B2B);
    s.description = "Decision makers for employee benefits".to_string();
    s.job_titles = strings(&["HR Director", "Benefits Manager", "People Lead"]);
    s.company_size = "50-500 employees".to_string();
    s.awareness_level = AwarenessLevel::SolutionAware;
    s.buying_stage = BuyingStage::Consideration;
    s.pain_points = strings(&[
        "Employee retention",
        "Benefits complexity",
        "Cost management",
    ]);
    s.goals = strings(&[
        "Improve benefits package",
        "Attract talent",
        "Easy administration",
    ]);
    s
}

fn smb_decision_makers() -> AudienceSegment {
    let mut s = AudienceSegment::new("SMB Decision Makers", JourneyType::B2B);
    s.description = "Small business owners and managers".to_string();
    s.job_titles = strings(&["Founder", "CEO", "Operations Manager"]);
    s.company_size = "1-50 employees".to_string();
    s.awareness_level = AwarenessLevel::ProblemAware;
    s.buying_stage = BuyingStage::Consideration;
    s.pain_points = strings(&[
        "Manual processes",
        "No budget for enterprise tools",
        "Need quick wins",
    ]);
    s.goals = strings(&["Automate tasks", "Save time", "Professional appearance"]);
    s
}

fn enterprise_champions() -> AudienceSegment {
    let mut s = AudienceSegment::new("Enterprise Champions", JourneyType::B2B);
    s.description = "Internal advocates at larger companies".to_string();
    s.job_titles = strings(&["Team Lead", "Department Manager", "Senior Analyst"]);
    s.company_size = "200+ employees".to_string();
    s.awareness_level = AwarenessLevel::SolutionAware;
    s.buying_stage = BuyingStage::Consideration;
    s.pain_points = strings(&[
        "Need to justify ROI",
        "Integration concerns",
        "Security requirements",
    ]);
    s.goals = strings(&[
        "Prove value to leadership",
        "Solve team problems",
        "Career advancement",
    ]);
    s
}

fn productivity_seekers() -> AudienceSegment {
    let mut s = AudienceSegment::new("Productivity Seekers", JourneyType::B2C);
    s.description = "Individuals wanting to work smarter".to_string();
    s.age_range = "25-45".to_string();
    s.awareness_level = AwarenessLevel::ProblemAware;
    s.buying_stage = BuyingStage::Consideration;
    s.pain_points = strings(&["Too many tasks", "Disorganized", "Overwhelmed"]);
    s.goals = strings(&["Get organized", "Save time", "Reduce stress"]);
    s
}

fn value_seekers() -> AudienceSegment {
    let mut s = AudienceSegment::new("Value Seekers", JourneyType::B2C);
    s.description = "Price-conscious shoppers looking for deals".to_string();
    s.age_range = "25-45".to_string();
    s.awareness_level = AwarenessLevel::SolutionAware;
    s.buying_stage = BuyingStage::Consideration;
    s.pain_points = strings(&[
        "Budget constraints",
        "Want best value",
        "Fear of missing deals",
    ]);
    s.goals = strings(&["Save money", "Get quality", "Find deals"]);
    s.motivations = strings(&["Savings", "Smart shopping"]);
    s
}

fn convenience_buyers() -> AudienceSegment {
    let mut s = AudienceSegment::new("Convenience Buyers", JourneyType::B2C);
    s.description = "Time-pressed shoppers prioritizing ease".to_string();
    s.age_range = "30-55".to_string();
    s.awareness_level = AwarenessLevel::ProductAware;
    s.buying_stage = BuyingStage::Decision;
    s.pain_points = strings(&[
        "No time to shop around",
        "Want reliability",
        "Hate complicated checkout",
    ]);
    s.goals = strings(&["Quick purchase", "Reliable delivery", "Easy returns"]);
    s.motivations = strings(&["Convenience", "Time-saving"]);
    s
}

fn grant_making_organizations() -> AudienceSegment {
    let mut s = AudienceSegment::new("Grant-Making Organizations", JourneyType::B2B);
    s.description =
        "Foundations, trusts, and corporate CSR teams managing grant programs".to_string();
    s.job_titles = strings(&[
        "Program Manager",
        "Grants Officer",
        "Foundation Director",
        "CSR Manager",
    ]);
    s.company_size = "10-500 employees".to_string();
    s.awareness_level = AwarenessLevel::ProblemAware;
    s.buying_stage = BuyingStage::Consideration;
    s.pain_points = strings(&[
        "Drowning in spreadsheets",
        "Manual application reviews",
        "Can't track impact",
        "Too much admin time",
    ]);
    s.goals = strings(&[
        "Streamline grant management",
        "Track social value",
        "Reduce admin burden",
        "Better funding decisions",
    ]);
    s.motivations = strings(&["Create more impact", "Work smarter not harder"]);
    s
}

fn community_organizations() -> AudienceSegment {
    let mut s = AudienceSegment::new("Community Organizations", JourneyType::B2B);
    s.description =
        "Nonprofits and charities seeking funding and managing grants received".to_string();
    s.job_titles = strings(&[
        "Executive Director",
        "Fundraising Manager",
        "Development Officer",
    ]);
    s.company_size = "1-50 employees".to_string();
    s.awareness_level = AwarenessLevel::SolutionAware;
    s.buying_stage = BuyingStage::Consideration;
    s.pain_points = strings(&[
        "Complex application processes",
        "Reporting requirements",
        "Finding funding opportunities",
    ]);
    s.goals = strings(&[
        "Win more grants",
        "Simplify reporting",
        "Build funder relationships",
    ]);
    s.motivations = strings(&["Secure funding", "Focus on mission"]);
    s
}

fn grant_productivity_seekers() -> AudienceSegment {
    let mut s = AudienceSegment::new("Productivity Seekers", JourneyType::B2C);
    s.description = "Individuals seeking to streamline grant-related work".to_string();
    s.age_range = "25-45".to_string();
    s.awareness_level = AwarenessLevel::ProblemAware;
    s.buying_stage = BuyingStage::Consideration;
    s.pain_points = strings(&[
        "Too many tasks",
        "Disorganized workflows",
        "Overwhelmed by complexity",
    ]);
    s.goals = strings(&["Get organized", "Save time", "Reduce stress"]);
    s.motivations = strings(&["Efficiency", "Work-life balance"]);
    s
}
