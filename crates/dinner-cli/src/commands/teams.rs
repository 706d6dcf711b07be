use std::path::Path;

use dinner_assign::{AssignmentConfig, AssignmentResult, RngSource, build_teams};
use dinner_core::{HostingCapability, Participant, RunningDinnerConfig, load_participants};
use tracing::info;

pub fn teams(
    participants: &str,
    config: Option<&str>,
    seed: Option<u64>,
    format: &str,
) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => RunningDinnerConfig::from_file(Path::new(path))?,
        None => RunningDinnerConfig::default(),
    };
    let participants = load_participants(Path::new(participants))?;
    info!(participants = participants.len(), team_size = config.team_size, "loaded participants");

    let mut rng = match seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_os_rng(),
    };
    let result = build_teams(&participants, &AssignmentConfig::from(&config), &mut rng)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            print!("{}", format_result(&result, &config));
        }
    }

    Ok(())
}

pub fn format_result(result: &AssignmentResult<Participant>, config: &RunningDinnerConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} teams of {} ({} courses, hosts need {} seats)\n\n",
        result.teams.len(),
        config.team_size,
        config.course_count(),
        config.needed_seats()
    ));

    for team in &result.teams {
        out.push_str(&format!("Team {}:\n", team.number));
        for member in &team.members {
            out.push_str(&format!("  {}\n", describe(member, config)));
        }
        out.push('\n');
    }

    if !result.not_assigned.is_empty() {
        out.push_str(&format!("Not assigned ({}):\n", result.not_assigned.len()));
        for p in &result.not_assigned {
            out.push_str(&format!("  {}\n", describe(p, config)));
        }
    }

    out
}

fn describe(p: &Participant, config: &RunningDinnerConfig) -> String {
    let host = match config.can_host(p) {
        HostingCapability::Yes => "can host",
        HostingCapability::No => "cannot host",
        HostingCapability::Unknown => "seats unknown",
    };
    format!("{} {} ({host})", p.number, p.name)
}
