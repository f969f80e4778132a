use console::style;
use lotto_engine::{DrawSnapshot, PickSet};
use lotto_session::StopReason;

/// Numbers of `picks`, highlighting the ones found in `hits`
fn paint_numbers(picks: &PickSet, hits: &PickSet) -> String {
    picks
        .iter()
        .map(|&n| {
            let cell = format!("{n:>2}");
            if hits.contains(n) {
                style(cell).green().bold().to_string()
            } else {
                style(cell).dim().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_picks(label: &str, picks: &PickSet) -> String {
    format!("{label}: {}", style(picks).yellow().bold())
}

/// One line per drawing: winners, matches of this drawing, running tally
pub fn render_draw(snapshot: &DrawSnapshot) -> String {
    let tally = &snapshot.tally;
    format!(
        "#{:<8} [{}]  matched {}  | 3:{} 4:{} 5:{} 6:{} | {:.2} years",
        tally.drawings,
        paint_numbers(&snapshot.winners, &snapshot.picks),
        snapshot.matches,
        tally.three,
        tally.four,
        tally.five,
        tally.six,
        snapshot.years
    )
}

pub fn render_json(snapshot: &DrawSnapshot) -> anyhow::Result<String> {
    Ok(serde_json::to_string(snapshot)?)
}

pub fn render_summary(reason: StopReason, last: Option<&DrawSnapshot>) -> String {
    let Some(snapshot) = last else {
        return format!("Stopped ({reason}) before the first drawing");
    };

    let tally = &snapshot.tally;
    let headline = match reason {
        StopReason::Jackpot => style("JACKPOT!".to_owned()).green().bold().to_string(),
        StopReason::Cancelled => "Stopped".to_owned(),
        StopReason::DrawLimit => "Drawing limit reached".to_owned(),
    };

    [
        headline,
        render_picks("Your picks", &snapshot.picks),
        render_picks("Last winners", &snapshot.winners),
        format!("3 of 6: {}", tally.three),
        format!("4 of 6: {}", tally.four),
        format!("5 of 6: {}", tally.five),
        format!("6 of 6: {}", tally.six),
        format!("Drawings: {}", tally.drawings),
        format!("Years: {:.2}", snapshot.years),
    ]
    .join("\n")
}
