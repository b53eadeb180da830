use super::*;

#[test]
fn parks_at_most_one_ticket() {
    let mut s = ManualScheduler::new();
    s.request_frame(FrameTicket::new(1));
    s.request_frame(FrameTicket::new(2));
    assert_eq!(s.pending(), Some(FrameTicket::new(2)));
    assert_eq!(s.requested(), 2);
    assert_eq!(s.take_pending().map(FrameTicket::generation), Some(2));
    assert_eq!(s.take_pending(), None);
}

#[test]
fn cancel_only_removes_matching_ticket() {
    let mut s = ManualScheduler::new();
    s.request_frame(FrameTicket::new(3));
    s.cancel_frame(FrameTicket::new(2));
    assert_eq!(s.pending(), Some(FrameTicket::new(3)));
    s.cancel_frame(FrameTicket::new(3));
    assert_eq!(s.pending(), None);
    assert_eq!(s.cancelled(), 1);
    s.cancel_frame(FrameTicket::new(3));
    assert_eq!(s.cancelled(), 1);
}
