use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::widgets::{WidgetError, WidgetKind};

#[derive(Clone, Default)]
struct SharedLibrary {
    closed: Rc<RefCell<Vec<&'static str>>>,
    constructed: Rc<RefCell<Vec<WidgetKind>>>,
}

impl WidgetLibrary for SharedLibrary {
    type Element = &'static str;

    fn construct(&mut self, kind: WidgetKind, _element: &&'static str) -> Result<(), WidgetError> {
        self.constructed.borrow_mut().push(kind);
        Ok(())
    }

    fn close_alert(&mut self, element: &&'static str) -> Result<(), WidgetError> {
        if *element == "detached" {
            return Err(WidgetError::Close("element not in document".to_owned()));
        }
        self.closed.borrow_mut().push(*element);
        Ok(())
    }
}

#[derive(Default)]
struct ManualScheduler {
    pending: Vec<(u32, Box<dyn FnOnce()>)>,
}

impl Scheduler for ManualScheduler {
    fn after(&mut self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.pending.push((delay_ms, task));
    }
}

impl ManualScheduler {
    fn fire_all(&mut self) {
        for (_, task) in self.pending.drain(..) {
            task();
        }
    }
}

fn alert(element: &'static str, class_name: &str) -> (&'static str, String) {
    (element, class_name.to_owned())
}

// =============================================================
// is_permanent
// =============================================================

#[test]
fn permanent_class_is_detected_among_others() {
    assert!(is_permanent("alert alert-info alert-permanent"));
    assert!(is_permanent("alert-permanent"));
}

#[test]
fn similar_class_names_are_not_permanent() {
    assert!(!is_permanent("alert alert-success"));
    assert!(!is_permanent("alert alert-permanently-hidden"));
    assert!(!is_permanent(""));
}

// =============================================================
// schedule_dismissals
// =============================================================

#[test]
fn only_non_permanent_alerts_are_scheduled() {
    let library = SharedLibrary::default();
    let mut scheduler = ManualScheduler::default();
    let alerts = vec![
        alert("flash-1", "alert alert-success"),
        alert("notice", "alert alert-warning alert-permanent"),
        alert("flash-2", "alert alert-danger"),
    ];
    let count = schedule_dismissals(alerts, &library, &mut scheduler, 5000);
    assert_eq!(count, 2);
    assert!(scheduler.pending.iter().all(|(delay, _)| *delay == 5000));
}

#[test]
fn nothing_closes_before_the_timer_fires() {
    let library = SharedLibrary::default();
    let mut scheduler = ManualScheduler::default();
    schedule_dismissals(vec![alert("flash", "alert")], &library, &mut scheduler, 5000);
    assert!(library.closed.borrow().is_empty());

    scheduler.fire_all();
    assert_eq!(*library.closed.borrow(), vec!["flash"]);
}

#[test]
fn dismissal_only_closes_and_never_constructs() {
    let library = SharedLibrary::default();
    let mut scheduler = ManualScheduler::default();
    schedule_dismissals(vec![alert("flash", "alert"), alert("notice", "alert")], &library, &mut scheduler, 5000);
    scheduler.fire_all();
    assert_eq!(*library.closed.borrow(), vec!["flash", "notice"]);
    assert!(library.constructed.borrow().is_empty());
}

#[test]
fn failed_close_does_not_affect_other_alerts() {
    let library = SharedLibrary::default();
    let mut scheduler = ManualScheduler::default();
    let alerts = vec![alert("detached", "alert"), alert("flash", "alert")];
    schedule_dismissals(alerts, &library, &mut scheduler, 10);
    scheduler.fire_all();
    assert_eq!(*library.closed.borrow(), vec!["flash"]);
}

#[test]
fn no_alerts_schedules_nothing() {
    let library = SharedLibrary::default();
    let mut scheduler = ManualScheduler::default();
    assert_eq!(schedule_dismissals(Vec::new(), &library, &mut scheduler, 5000), 0);
    assert!(scheduler.pending.is_empty());
}
