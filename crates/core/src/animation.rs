use crate::Card;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn lerp(self, to: Point, t: f32) -> Point {
        Point {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Linear progress in `[0, 1]`; a zero duration is already complete.
pub fn progress(elapsed_ms: u64, duration_ms: u64) -> f32 {
    if duration_ms == 0 {
        return 1.0;
    }
    (elapsed_ms as f32 / duration_ms as f32).min(1.0)
}

/// One card travelling across the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub card: Card,
    pub face_up: bool,
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    pub card: Card,
    pub face_up: bool,
    pub at: Point,
    pub rotation: f32,
    pub scale: f32,
}

impl Motion {
    pub fn frame(&self, t: f32) -> MotionFrame {
        let eased = ease_in_out_quad(t);
        MotionFrame {
            card: self.card,
            face_up: self.face_up,
            at: self.from.lerp(self.to, eased),
            rotation: (eased * PI * 2.0).sin() * PI / 16.0,
            scale: 1.0 + (eased * PI).sin() * 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(u64);

#[derive(Debug, Clone)]
struct Job<T> {
    id: JobId,
    motions: Vec<Motion>,
    started_ms: u64,
    duration_ms: u64,
    follow_up: Option<T>,
}

impl<T> Job<T> {
    fn done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_ms) >= self.duration_ms
    }
}

/// Time-driven queue of in-flight transitions.
///
/// A job is a group of motions sharing one duration plus an optional follow-up. The
/// follow-up is released exactly once, by the first `advance` whose clock reaches the
/// job's end; jobs finishing in the same call are released in scheduling order. A job
/// scheduled during follow-up processing starts at the current clock and therefore
/// never completes inside the `advance` call that scheduled it. Jobs cannot be cancelled.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_id: u64,
    jobs: Vec<Job<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            jobs: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_idle(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn animate(&mut self, motions: Vec<Motion>, duration_ms: u64, follow_up: Option<T>) -> JobId {
        let id = JobId(self.next_id);
        self.next_id += 1;
        self.jobs.push(Job {
            id,
            motions,
            started_ms: self.now_ms,
            duration_ms,
            follow_up,
        });
        id
    }

    pub fn delay(&mut self, duration_ms: u64, follow_up: T) -> JobId {
        self.animate(Vec::new(), duration_ms, Some(follow_up))
    }

    /// Moves the clock forward and returns the follow-ups of every finished job.
    pub fn advance(&mut self, dt_ms: u64) -> Vec<T> {
        self.now_ms = self.now_ms.saturating_add(dt_ms);
        let now = self.now_ms;
        let mut released = Vec::new();
        let mut index = 0;
        while index < self.jobs.len() {
            if self.jobs[index].done(now) {
                let job = self.jobs.remove(index);
                if let Some(follow_up) = job.follow_up {
                    released.push(follow_up);
                }
            } else {
                index += 1;
            }
        }
        released
    }

    /// Remaining time until the next job completes.
    pub fn time_to_next(&self) -> Option<u64> {
        self.jobs
            .iter()
            .map(|job| {
                job.started_ms
                    .saturating_add(job.duration_ms)
                    .saturating_sub(self.now_ms)
            })
            .min()
    }

    pub fn frames(&self) -> Vec<MotionFrame> {
        let mut frames = Vec::new();
        for job in &self.jobs {
            let t = progress(self.now_ms.saturating_sub(job.started_ms), job.duration_ms);
            frames.extend(job.motions.iter().map(|motion| motion.frame(t)));
        }
        frames
    }

    pub fn motion_count(&self) -> usize {
        self.jobs.iter().map(|job| job.motions.len()).sum()
    }

    pub fn pending(&self) -> impl Iterator<Item = &T> + '_ {
        self.jobs.iter().filter_map(|job| job.follow_up.as_ref())
    }

    pub fn contains(&self, id: JobId) -> bool {
        self.jobs.iter().any(|job| job.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn motion() -> Motion {
        Motion {
            card: Card::standard(Suit::Spades, Rank::Ace),
            face_up: true,
            from: Point::new(0.0, 0.0),
            to: Point::new(100.0, 50.0),
        }
    }

    #[test]
    fn follow_up_fires_once_when_duration_elapses() {
        let mut scheduler = Scheduler::new();
        scheduler.animate(vec![motion()], 100, Some("arrived"));
        assert!(scheduler.advance(99).is_empty());
        assert_eq!(scheduler.advance(1), vec!["arrived"]);
        assert!(scheduler.advance(1000).is_empty());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn same_tick_completions_keep_scheduling_order() {
        let mut scheduler = Scheduler::new();
        scheduler.delay(30, 1);
        scheduler.delay(10, 2);
        scheduler.delay(20, 3);
        assert_eq!(scheduler.advance(50), vec![1, 2, 3]);
    }

    #[test]
    fn grouped_motions_share_one_follow_up() {
        let mut scheduler = Scheduler::new();
        scheduler.animate(vec![motion(), motion()], 800, Some("pair"));
        assert_eq!(scheduler.motion_count(), 2);
        assert_eq!(scheduler.pending().count(), 1);
        assert_eq!(scheduler.advance(800), vec!["pair"]);
        assert_eq!(scheduler.motion_count(), 0);
    }

    #[test]
    fn frames_follow_eased_path() {
        let mut scheduler: Scheduler<()> = Scheduler::new();
        scheduler.animate(vec![motion()], 100, None);
        let start = scheduler.frames()[0];
        assert_eq!(start.at, Point::new(0.0, 0.0));
        scheduler.advance(50);
        let middle = scheduler.frames()[0];
        assert!((middle.at.x - 50.0).abs() < 1e-3);
        assert!((middle.scale - 1.2).abs() < 1e-3);
        assert_eq!(scheduler.time_to_next(), Some(50));
    }

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert_eq!(progress(5, 0), 1.0);
    }
}
