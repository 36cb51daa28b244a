use super::*;

use pokerroom::Room;
use pokerroom::session::Lifecycle;
use pokerroom::session::notice::Notice;

fn voted(id: &str, name: &str, vote: Option<&str>) -> Participant {
    Participant { vote: vote.map(ToOwned::to_owned), ..Participant::new(id, name) }
}

#[test]
fn others_votes_are_hidden_while_collecting() {
    let bob = voted("P2", "Bob", Some("8"));
    assert_eq!(participant_line(&bob, false, Visibility::Collecting), "  Bob (P2) [voted]");
    assert_eq!(participant_line(&bob, false, Visibility::Revealed), "  Bob (P2) [8]");
    assert_eq!(participant_line(&bob, true, Visibility::Collecting), "* Bob (P2) [8]");
    assert_eq!(participant_line(&voted("P3", "Cy", None), false, Visibility::Revealed), "  Cy (P3) [-]");
}

#[test]
fn summary_line_includes_average_and_consensus() {
    let summary = VoteSummary { participants: 3, votes_cast: 2, average: Some(6.5), consensus: None };
    assert_eq!(summary_line(&summary), "2/3 voted, average 6.5");
    let agreed = VoteSummary { participants: 2, votes_cast: 2, average: Some(8.0), consensus: Some("8".into()) };
    assert_eq!(summary_line(&agreed), "2/2 voted, average 8.0, consensus 8");
}

#[test]
fn view_lists_participants_and_notices() {
    let mut room = Room { id: "R1".to_owned(), ..Room::default() };
    room.participants.insert("P1".to_owned(), voted("P1", "Ann", Some("5")));
    room.participants.insert("P2".to_owned(), voted("P2", "Bob", None));
    let session = SessionView {
        phase: Lifecycle::Joined,
        room: Some(room),
        self_id: Some("P1".to_owned()),
        can_vote: true,
        notices: vec![Notice { id: 4, level: NoticeLevel::Warning, message: "vote failed".to_owned() }],
        ..SessionView::default()
    };

    let text = view(&session);
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "room R1 | Joined | Disconnected | collecting");
    assert_eq!(lines[1], "  * Ann (P1) [5]");
    assert_eq!(lines[2], "    Bob (P2) [-]");
    assert_eq!(lines[3], "! [4] warning: vote failed");
}

#[test]
fn view_without_room_says_so() {
    assert_eq!(view(&SessionView::default()), "not in a room (Idle)");
}
