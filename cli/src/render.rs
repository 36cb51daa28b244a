//! Plain-text rendering of a session view.

use std::fmt::Write as _;

use pokerroom::room::{Participant, VoteSummary};
use pokerroom::session::notice::NoticeLevel;
use pokerroom::{SessionView, Visibility};

/// Render the whole view as a multi-line block.
#[must_use]
pub fn view(view: &SessionView) -> String {
    let mut out = String::new();
    let Some(room) = view.room.as_ref() else {
        let _ = write!(out, "not in a room ({:?})", view.phase);
        append_notices(&mut out, view);
        return out;
    };

    let _ = write!(
        out,
        "room {} | {:?} | {:?} | {}",
        room.id,
        view.phase,
        view.connection,
        match view.visibility {
            Visibility::Collecting => "collecting",
            Visibility::Revealed => "revealed",
        }
    );
    for participant in room.participants.values() {
        let is_self = view.self_id.as_deref() == Some(participant.id.as_str());
        let _ = write!(out, "\n  {}", participant_line(participant, is_self, view.visibility));
    }
    if let Some(summary) = view.summary.as_ref() {
        let _ = write!(out, "\n{}", summary_line(summary));
    }
    append_notices(&mut out, view);
    out
}

fn append_notices(out: &mut String, view: &SessionView) {
    for notice in &view.notices {
        let level = match notice.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };
        let _ = write!(out, "\n! [{}] {level}: {}", notice.id, notice.message);
    }
}

/// One participant row. Other people's votes stay hidden until revealed.
#[must_use]
pub fn participant_line(participant: &Participant, is_self: bool, visibility: Visibility) -> String {
    let marker = if is_self { '*' } else { ' ' };
    let vote = match (participant.vote.as_deref(), visibility, is_self) {
        (None, _, _) => "-",
        (Some(value), Visibility::Revealed, _) | (Some(value), Visibility::Collecting, true) => value,
        (Some(_), Visibility::Collecting, false) => "voted",
    };
    format!("{marker} {} ({}) [{vote}]", participant.display_name, participant.id)
}

#[must_use]
pub fn summary_line(summary: &VoteSummary) -> String {
    let mut line = format!("{}/{} voted", summary.votes_cast, summary.participants);
    if let Some(average) = summary.average {
        let _ = write!(line, ", average {average:.1}");
    }
    if let Some(consensus) = summary.consensus.as_deref() {
        let _ = write!(line, ", consensus {consensus}");
    }
    line
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
