//! Drives [`AnimationTask`]s on the runtime's frame clock.
//!
//! Each running task keeps exactly one frame callback registered. When the
//! host drains a frame, the task emits every write whose tick has come due,
//! in order, then re-registers until the settling frame has been written.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use foldhead_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle};
use smallvec::SmallVec;

use crate::task::{AnimationConfig, AnimationTask, ModifyOriginalPolicy, OverlapPolicy};

pub type AnimationId = u64;

/// How a frame touches the header's original height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OriginalWrite {
    Keep,
    /// Write the height first, then replace the original height.
    AfterHeight(i32),
    /// Replace the original height, then write the height.
    BeforeHeight(i32),
}

/// One height write produced by a running task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeightFrame {
    pub animation: AnimationId,
    pub index: usize,
    pub height: i32,
    pub is_last: bool,
    pub original: OriginalWrite,
}

type FrameSink = Rc<dyn Fn(HeightFrame)>;
type RunningList = RefCell<SmallVec<[Rc<RunningTask>; 2]>>;

struct RunningTask {
    id: AnimationId,
    task: AnimationTask,
    frame_count: usize,
    tick_nanos: u64,
    modify_policy: ModifyOriginalPolicy,
    next_index: Cell<usize>,
    start_frame_time_nanos: Cell<Option<u64>>,
    is_running: Cell<bool>,
    registration: RefCell<Option<FrameCallbackRegistration>>,
}

impl RunningTask {
    fn frame(&self, index: usize) -> HeightFrame {
        let is_last = index + 1 >= self.frame_count;
        let original = match (self.task.modify_original, self.modify_policy) {
            (false, _) => OriginalWrite::Keep,
            (true, ModifyOriginalPolicy::EveryFrame) => OriginalWrite::AfterHeight(self.task.to),
            (true, ModifyOriginalPolicy::FinalFrame) if is_last => {
                OriginalWrite::BeforeHeight(self.task.to)
            }
            (true, ModifyOriginalPolicy::FinalFrame) => OriginalWrite::Keep,
        };
        HeightFrame {
            animation: self.id,
            index,
            height: self.task.frame_height(index),
            is_last,
            original,
        }
    }

    /// Frames whose scheduled time is at or before `elapsed_nanos`.
    fn frames_due(&self, elapsed_nanos: u64) -> usize {
        if self.tick_nanos == 0 {
            return self.frame_count;
        }
        let due = elapsed_nanos / self.tick_nanos + 1;
        usize::try_from(due).map_or(self.frame_count, |due| due.min(self.frame_count))
    }

    fn stop(&self) {
        self.is_running.set(false);
        let registration = self.registration.borrow_mut().take();
        drop(registration);
    }
}

fn remove_running(running: &Weak<RunningList>, id: AnimationId) {
    if let Some(running) = running.upgrade() {
        running.borrow_mut().retain(|task| task.id != id);
    }
}

fn schedule_next_frame(
    task: Rc<RunningTask>,
    frame_clock: FrameClock,
    sink: FrameSink,
    running: Weak<RunningList>,
) {
    let task_for_frame = Rc::clone(&task);
    let clock_for_frame = frame_clock.clone();
    let registration = frame_clock.with_frame_nanos(move |frame_time_nanos| {
        let task = task_for_frame;
        let frame_clock = clock_for_frame;
        if !task.is_running.get() {
            return;
        }

        let start = match task.start_frame_time_nanos.get() {
            Some(start) => start,
            None => {
                task.start_frame_time_nanos.set(Some(frame_time_nanos));
                frame_time_nanos
            }
        };
        if frame_time_nanos < start {
            log::warn!(
                "animation {} saw frame time go backwards ({} < {}); continuing",
                task.id,
                frame_time_nanos,
                start
            );
        }
        let elapsed = frame_time_nanos.saturating_sub(start);

        let due = task.frames_due(elapsed);
        while task.is_running.get() && task.next_index.get() < due {
            let index = task.next_index.get();
            task.next_index.set(index + 1);
            sink(task.frame(index));
        }

        if task.next_index.get() >= task.frame_count {
            log::debug!("animation {} settled on {}", task.id, task.task.to);
            task.stop();
            remove_running(&running, task.id);
        } else if task.is_running.get() {
            schedule_next_frame(task, frame_clock, sink, running);
        }
    });

    if task.is_running.get() {
        *task.registration.borrow_mut() = Some(registration);
    }
}

/// Starts and tracks height animations.
pub struct AnimationScheduler {
    frame_clock: FrameClock,
    config: Cell<AnimationConfig>,
    running: Rc<RunningList>,
    next_id: Cell<AnimationId>,
}

impl AnimationScheduler {
    pub fn new(runtime: RuntimeHandle, config: AnimationConfig) -> Self {
        Self {
            frame_clock: runtime.frame_clock(),
            config: Cell::new(config),
            running: Rc::new(RefCell::new(SmallVec::new())),
            next_id: Cell::new(1),
        }
    }

    pub fn config(&self) -> AnimationConfig {
        self.config.get()
    }

    /// Applies to tasks started afterwards.
    pub fn set_config(&self, config: AnimationConfig) {
        self.config.set(config);
    }

    /// Start `task`, delivering each write to `sink` on the frame clock.
    ///
    /// Tasks are never cancelled by the frames they emit; only a later
    /// [`AnimationScheduler::start`] under [`OverlapPolicy::Supersede`] or an
    /// explicit [`AnimationScheduler::cancel_all`] stops them early.
    pub fn start(&self, task: AnimationTask, sink: impl Fn(HeightFrame) + 'static) -> AnimationId {
        let config = self.config.get();
        if config.overlap == OverlapPolicy::Supersede {
            let superseded = self.cancel_all();
            if superseded > 0 {
                log::debug!("superseded {superseded} running animation(s)");
            }
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let running = Rc::new(RunningTask {
            id,
            task,
            frame_count: task.frame_count(),
            tick_nanos: config.cadence.tick_nanos(&task),
            modify_policy: config.modify_policy,
            next_index: Cell::new(0),
            start_frame_time_nanos: Cell::new(None),
            is_running: Cell::new(true),
            registration: RefCell::new(None),
        });
        log::debug!(
            "animation {id}: {} -> {} over {} ms in {} frames",
            task.from,
            task.to,
            task.duration_millis,
            running.frame_count
        );

        self.running.borrow_mut().push(Rc::clone(&running));
        schedule_next_frame(
            running,
            self.frame_clock.clone(),
            Rc::new(sink),
            Rc::downgrade(&self.running),
        );
        id
    }

    /// Stop every running task. Returns how many were stopped.
    pub fn cancel_all(&self) -> usize {
        let stopped: SmallVec<[Rc<RunningTask>; 2]> = self.running.borrow_mut().drain(..).collect();
        for task in &stopped {
            task.stop();
        }
        stopped.len()
    }

    pub fn cancel(&self, id: AnimationId) -> bool {
        let task = {
            let mut running = self.running.borrow_mut();
            let index = running.iter().position(|task| task.id == id);
            index.map(|index| running.remove(index))
        };
        match task {
            Some(task) => {
                task.stop();
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.running.borrow().is_empty()
    }

    pub fn running_tasks(&self) -> usize {
        self.running.borrow().len()
    }
}

impl Drop for AnimationScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
#[path = "tests/scheduler_tests.rs"]
mod tests;
