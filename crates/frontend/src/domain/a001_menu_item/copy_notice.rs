//! Timers that clear the "copied" notice
//!
//! Every copy schedules its own expiry; a later copy leaves earlier timers
//! running. Fired timers are pruned on the next copy, so only pending ones
//! are kept. Dropping [`CopyNoticeTimers`] drops the handles, which cancels
//! whatever has not fired yet.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::state::COPY_NOTICE_MS;

/// Отложенный запуск задачи. Drop у `Handle` отменяет запуск.
pub trait NoticeScheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct CopyNoticeTimers<H> {
    next_id: u64,
    pending: HashMap<u64, H>,
    // Сработавшие таймеры отмечают себя здесь; хэндл нельзя дропать
    // изнутри его же колбэка.
    fired: Rc<RefCell<Vec<u64>>>,
}

impl<H> CopyNoticeTimers<H> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: HashMap::new(),
            fired: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Schedule `on_expire` after [`COPY_NOTICE_MS`].
    pub fn start<S>(&mut self, scheduler: &S, on_expire: impl FnOnce() + 'static)
    where
        S: NoticeScheduler<Handle = H>,
    {
        self.prune_fired();

        let id = self.next_id;
        self.next_id += 1;

        let fired = Rc::clone(&self.fired);
        let handle = scheduler.schedule(
            COPY_NOTICE_MS,
            Box::new(move || {
                fired.borrow_mut().push(id);
                on_expire();
            }),
        );
        self.pending.insert(id, handle);
    }

    /// Сколько таймеров ещё хранится
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn prune_fired(&mut self) {
        let fired: Vec<u64> = self.fired.borrow_mut().drain(..).collect();
        for id in fired {
            self.pending.remove(&id);
        }
    }
}

impl<H> Default for CopyNoticeTimers<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_menu_item::state::{WidgetState, COPIED_MESSAGE};
    use std::cell::Cell;

    type Task = (u32, Option<Box<dyn FnOnce()>>, Rc<Cell<bool>>);

    /// Ручной планировщик: задачи копятся, тест запускает их сам
    #[derive(Default)]
    struct ManualScheduler {
        tasks: RefCell<Vec<Task>>,
    }

    /// Хэндл отмечает отмену при drop
    struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl NoticeScheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.tasks
                .borrow_mut()
                .push((delay_ms, Some(task), Rc::clone(&cancelled)));
            ManualHandle { cancelled }
        }
    }

    impl ManualScheduler {
        fn delays(&self) -> Vec<u32> {
            self.tasks.borrow().iter().map(|(delay, _, _)| *delay).collect()
        }

        fn is_cancelled(&self, index: usize) -> bool {
            self.tasks.borrow()[index].2.get()
        }

        /// Запустить задачу, если её не отменили
        fn fire(&self, index: usize) {
            let mut tasks = self.tasks.borrow_mut();
            let (_, slot, cancelled) = &mut tasks[index];
            let task = if cancelled.get() { None } else { slot.take() };
            drop(tasks);
            if let Some(task) = task {
                task();
            }
        }
    }

    /// Same steps as the view model's copy: notice on, expiry scheduled.
    fn copy(
        state: &Rc<RefCell<WidgetState>>,
        timers: &mut CopyNoticeTimers<ManualHandle>,
        scheduler: &ManualScheduler,
    ) {
        state.borrow_mut().notify_copied();
        let state = Rc::clone(state);
        timers.start(scheduler, move || state.borrow_mut().expire_copy_notice());
    }

    #[test]
    fn test_copy_notice_cleared_after_timeout() {
        let state = Rc::new(RefCell::new(WidgetState::new()));
        let scheduler = ManualScheduler::default();
        let mut timers = CopyNoticeTimers::new();

        copy(&state, &mut timers, &scheduler);
        assert_eq!(
            state.borrow().last_success_message.as_deref(),
            Some(COPIED_MESSAGE)
        );
        assert_eq!(scheduler.delays(), vec![2000]);

        scheduler.fire(0);
        assert!(state.borrow().last_success_message.is_none());
    }

    #[test]
    fn test_later_copy_keeps_earlier_timer() {
        let state = Rc::new(RefCell::new(WidgetState::new()));
        let scheduler = ManualScheduler::default();
        let mut timers = CopyNoticeTimers::new();

        copy(&state, &mut timers, &scheduler);
        copy(&state, &mut timers, &scheduler);
        assert_eq!(scheduler.delays(), vec![COPY_NOTICE_MS, COPY_NOTICE_MS]);
        assert!(!scheduler.is_cancelled(0));
        assert_eq!(timers.len(), 2);

        // первый таймер снимает уведомление, хотя второе копирование было позже
        scheduler.fire(0);
        assert!(state.borrow().last_success_message.is_none());
    }

    #[test]
    fn test_fired_timers_are_pruned() {
        let state = Rc::new(RefCell::new(WidgetState::new()));
        let scheduler = ManualScheduler::default();
        let mut timers = CopyNoticeTimers::new();

        for i in 0..5 {
            copy(&state, &mut timers, &scheduler);
            scheduler.fire(i);
        }
        assert_eq!(timers.len(), 1);

        copy(&state, &mut timers, &scheduler);
        assert_eq!(timers.len(), 1);
        assert!(!scheduler.is_cancelled(5));
    }

    #[test]
    fn test_drop_cancels_pending_timers() {
        let state = Rc::new(RefCell::new(WidgetState::new()));
        let scheduler = ManualScheduler::default();
        let mut timers = CopyNoticeTimers::new();

        copy(&state, &mut timers, &scheduler);
        drop(timers);

        assert!(scheduler.is_cancelled(0));
        scheduler.fire(0);
        assert_eq!(
            state.borrow().last_success_message.as_deref(),
            Some(COPIED_MESSAGE)
        );
    }
}
