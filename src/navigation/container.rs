// NavigationStack - Generic page/modal container

use super::backdrop::{Backdrop, BackdropFactory};
use super::error::{NavigationError, NavigationResult};
use super::interaction::InteractionGate;
use super::kind::{ContainerKind, Modal, Page};
use super::view::{TransitionState, View};
use crate::task::{AnimationTask, TaskHandle, TaskScheduler, TaskStatus, all_terminal};
use std::collections::HashMap;
use std::marker::PhantomData;

pub type PageContainer = NavigationStack<Page>;
pub type ModalContainer = NavigationStack<Modal>;

/// How many views a pop removes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopTarget {
    /// Remove this many views from the top
    Count(usize),
    /// Remove every view above the one with this id
    Destination(String),
}

#[derive(Clone, Copy)]
enum TransitionKind {
    Push,
    Pop { count: usize },
}

/// The single push or pop currently running
struct Transition {
    kind: TransitionKind,
    enter: Option<String>,
    /// Topmost first
    exits: Vec<String>,
    animations: Vec<TaskHandle>,
    done: TaskHandle,
}

/// Stack of registered views with strictly sequenced transitions
///
/// Views are registered once and owned by the container until it is
/// dropped. `push`/`pop` start the partner animations together and return a
/// handle; the stack itself is only changed once [`update`](Self::update)
/// (or the call itself, when nothing animates) sees every animation
/// terminal.
///
/// # Example
/// ```no_run
/// use mybuild_ar::animation::SlideTransition;
/// use mybuild_ar::navigation::{PageContainer, View};
///
/// let mut pages = PageContainer::new();
/// pages.register(View::new("home", 0, Box::new(SlideTransition::default())));
///
/// let handle = pages.push("home", true, |_| {}).unwrap();
/// while !handle.is_terminal() {
///     pages.update(1.0 / 60.0);
/// }
/// assert_eq!(pages.top(), Some("home"));
/// ```
pub struct NavigationStack<K: ContainerKind> {
    views: Vec<View>,
    index: HashMap<String, usize>,
    stack: Vec<String>,
    siblings: Vec<String>,
    backdrops: Vec<Backdrop>,
    backdrop_factory: Option<BackdropFactory>,
    scheduler: TaskScheduler,
    in_flight: Option<Transition>,
    gate: Option<InteractionGate>,
    _kind: PhantomData<K>,
}

impl<K: ContainerKind> NavigationStack<K> {
    pub fn new() -> Self {
        Self {
            views: Vec::new(),
            index: HashMap::new(),
            stack: Vec::new(),
            siblings: Vec::new(),
            backdrops: Vec::new(),
            backdrop_factory: None,
            scheduler: TaskScheduler::new(),
            in_flight: None,
            gate: None,
            _kind: PhantomData,
        }
    }

    /// Block input on this gate for the duration of each transition
    pub fn with_interaction_gate(mut self, gate: InteractionGate) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Create a backdrop per pushed view (only used by kinds with backdrops)
    pub fn with_backdrops(mut self, factory: BackdropFactory) -> Self {
        if !K::USES_BACKDROP {
            log::warn!("{}: backdrops are not used by this container", K::NAME);
        }
        self.backdrop_factory = Some(factory);
        self
    }

    /// Register a view
    ///
    /// A duplicate id is logged and skipped; returns whether the view was
    /// added.
    pub fn register(&mut self, view: View) -> bool {
        if self.index.contains_key(view.id()) {
            log::warn!("{}: view '{}' is already registered", K::NAME, view.id());
            return false;
        }

        let id = view.id().to_string();
        self.index.insert(id.clone(), self.views.len());
        self.views.push(view);
        self.place_sibling(&id);
        true
    }

    /// Push a registered view on top of the stack
    ///
    /// `on_load` runs before any animation so the caller can configure the
    /// view. The returned handle turns terminal when the view is committed
    /// to the stack.
    ///
    /// # Errors
    /// - `TransitionInProgress` if a push or pop is still running
    /// - `UnknownView` if `id` was never registered (logged; the container
    ///   is left unlocked)
    /// - `AlreadyInStack` if the view is already active
    pub fn push<F>(&mut self, id: &str, play_animation: bool, on_load: F) -> NavigationResult<TaskHandle>
    where
        F: FnOnce(&mut View),
    {
        self.ensure_idle()?;

        let Some(&enter_index) = self.index.get(id) else {
            log::error!("{}: cannot push unknown view '{}'", K::NAME, id);
            return Err(NavigationError::UnknownView(id.to_string()));
        };
        if self.stack.iter().any(|active| active == id) {
            return Err(NavigationError::AlreadyInStack(id.to_string()));
        }

        log::debug!("{}: push '{}'", K::NAME, id);
        self.lock_input();

        on_load(&mut self.views[enter_index]);
        self.place_sibling(id);

        let exit = self.stack.last().cloned();

        if let Some(exit_id) = &exit {
            self.view_mut(exit_id).before_exit(true, Some(id));
        }
        self.views[enter_index].before_enter(true, exit.as_deref());

        let mut animations = Vec::new();
        if let Some(exit_id) = &exit {
            if K::COVERS_PARTNER {
                animations.push(self.animate(exit_id, TransitionState::PushExit, play_animation));
            }
        }
        animations.push(self.animate(id, TransitionState::PushEnter, play_animation));
        if let Some(handle) = self.spawn_backdrop(id, play_animation) {
            animations.push(handle);
        }

        Ok(self.begin(Transition {
            kind: TransitionKind::Push,
            enter: Some(id.to_string()),
            exits: exit.into_iter().collect(),
            animations,
            done: TaskHandle::new(TaskStatus::Running),
        }))
    }

    /// Pop `count` views off the top of the stack
    pub fn pop(&mut self, play_animation: bool, count: usize) -> NavigationResult<TaskHandle> {
        self.pop_target(play_animation, PopTarget::Count(count))
    }

    /// Pop every view above `destination`
    pub fn pop_to(&mut self, play_animation: bool, destination: &str) -> NavigationResult<TaskHandle> {
        self.pop_target(play_animation, PopTarget::Destination(destination.to_string()))
    }

    /// Pop views off the top of the stack
    ///
    /// All popped views play their exit animation (topmost first) alongside
    /// the enter animation of the view that becomes the new top.
    ///
    /// # Errors
    /// - `TransitionInProgress` if a push or pop is still running
    /// - `InvalidPopCount` for a count of zero (or a destination already on top)
    /// - `PopCountExceedsDepth` if more views are requested than are stacked
    /// - `DestinationNotFound` if the destination id is not on the stack
    pub fn pop_target(&mut self, play_animation: bool, target: PopTarget) -> NavigationResult<TaskHandle> {
        self.ensure_idle()?;
        let count = self.resolve_pop_count(&target)?;

        let depth = self.stack.len();
        let exits: Vec<String> = self.stack[depth - count..].iter().rev().cloned().collect();
        let enter = (depth > count).then(|| self.stack[depth - count - 1].clone());

        log::debug!("{}: pop {} view(s) {:?}", K::NAME, count, exits);
        self.lock_input();

        let top = exits.first().cloned();
        for exit_id in &exits {
            self.view_mut(exit_id).before_exit(false, enter.as_deref());
        }
        if let Some(enter_id) = &enter {
            self.view_mut(enter_id).before_enter(false, top.as_deref());
        }

        let mut animations = Vec::new();
        for exit_id in &exits {
            animations.push(self.animate(exit_id, TransitionState::PopExit, play_animation));
            if let Some(handle) = self.backdrop_exit(exit_id, play_animation) {
                animations.push(handle);
            }
        }
        if let Some(enter_id) = &enter {
            if K::COVERS_PARTNER {
                animations.push(self.animate(enter_id, TransitionState::PopEnter, play_animation));
            }
        }

        Ok(self.begin(Transition {
            kind: TransitionKind::Pop { count },
            enter,
            exits,
            animations,
            done: TaskHandle::new(TaskStatus::Running),
        }))
    }

    /// Advance running animations by one tick and commit a finished transition
    pub fn update(&mut self, dt: f32) {
        self.scheduler.tick(dt);
        self.try_commit();
    }

    pub fn is_in_transition(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Active view ids, bottom first
    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    pub fn top(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn view(&self, id: &str) -> Option<&View> {
        self.index.get(id).map(|&i| &self.views[i])
    }

    /// Registered views in registration order
    pub fn views(&self) -> impl Iterator<Item = &View> {
        self.views.iter()
    }

    /// Display order of registered views, back to front
    pub fn sibling_order(&self) -> Vec<&str> {
        self.siblings.iter().map(String::as_str).collect()
    }

    /// Ids of the modals that currently own a backdrop, bottom first
    pub fn backdrops(&self) -> Vec<&str> {
        self.backdrops.iter().map(Backdrop::modal_id).collect()
    }

    /// Animation tasks still being stepped
    pub fn pending_animations(&self) -> usize {
        self.scheduler.in_flight()
    }

    fn ensure_idle(&self) -> NavigationResult<()> {
        if self.in_flight.is_some() {
            return Err(NavigationError::TransitionInProgress { container: K::NAME });
        }
        Ok(())
    }

    fn resolve_pop_count(&self, target: &PopTarget) -> NavigationResult<usize> {
        let depth = self.stack.len();
        let count = match target {
            PopTarget::Count(count) => *count,
            PopTarget::Destination(id) => self
                .stack
                .iter()
                .rev()
                .position(|active| active == id)
                .ok_or_else(|| NavigationError::DestinationNotFound(id.clone()))?,
        };

        if count == 0 {
            return Err(NavigationError::InvalidPopCount(count));
        }
        if count > depth {
            return Err(NavigationError::PopCountExceedsDepth {
                requested: count,
                depth,
            });
        }
        Ok(count)
    }

    fn view_mut(&mut self, id: &str) -> &mut View {
        let index = self.index[id];
        &mut self.views[index]
    }

    /// Move `id` to its place among siblings: before the first sibling with
    /// a strictly higher rendering order, otherwise on top.
    fn place_sibling(&mut self, id: &str) {
        self.siblings.retain(|sibling| sibling != id);

        let order = self.views[self.index[id]].rendering_order();
        let position = self
            .siblings
            .iter()
            .position(|sibling| self.views[self.index[sibling.as_str()]].rendering_order() > order)
            .unwrap_or(self.siblings.len());

        self.siblings.insert(position, id.to_string());
    }

    fn animate(&mut self, id: &str, state: TransitionState, play_animation: bool) -> TaskHandle {
        if !play_animation {
            return TaskHandle::completed();
        }
        match self.view_mut(id).animation_for(state) {
            Some(task) => self.scheduler.spawn(task),
            None => TaskHandle::completed(),
        }
    }

    fn spawn_backdrop(&mut self, modal_id: &str, play_animation: bool) -> Option<TaskHandle> {
        if !K::USES_BACKDROP {
            return None;
        }
        let factory = self.backdrop_factory.as_mut()?;
        let mut backdrop = Backdrop::new(modal_id, factory(modal_id));

        let handle = if play_animation {
            let task: Box<dyn AnimationTask> = backdrop.animation_mut().enter();
            self.scheduler.spawn(task)
        } else {
            TaskHandle::completed()
        };
        self.backdrops.push(backdrop);
        Some(handle)
    }

    fn backdrop_exit(&mut self, modal_id: &str, play_animation: bool) -> Option<TaskHandle> {
        let backdrop = self
            .backdrops
            .iter_mut()
            .rev()
            .find(|backdrop| backdrop.modal_id() == modal_id)?;

        if !play_animation {
            return Some(TaskHandle::completed());
        }
        let task = backdrop.animation_mut().exit();
        Some(self.scheduler.spawn(task))
    }

    fn lock_input(&self) {
        if let Some(gate) = &self.gate {
            gate.lock();
        }
    }

    fn unlock_input(&self) {
        if let Some(gate) = &self.gate {
            gate.unlock();
        }
    }

    fn begin(&mut self, transition: Transition) -> TaskHandle {
        let done = transition.done.clone();
        self.in_flight = Some(transition);
        // Nothing to wait for when every animation finished synchronously
        self.try_commit();
        done
    }

    fn try_commit(&mut self) {
        let Some(transition) = self
            .in_flight
            .take_if(|transition| all_terminal(&transition.animations))
        else {
            return;
        };

        let partner_of_exit = transition.enter.as_deref();
        let partner_of_enter = transition.exits.first().map(String::as_str);

        match transition.kind {
            TransitionKind::Push => {
                if let Some(enter_id) = &transition.enter {
                    self.stack.push(enter_id.clone());
                }
                for exit_id in &transition.exits {
                    self.view_mut(exit_id)
                        .after_exit(true, partner_of_exit, K::COVERS_PARTNER);
                }
                if let Some(enter_id) = &transition.enter {
                    self.view_mut(enter_id).after_enter(true, partner_of_enter);
                }
            }
            TransitionKind::Pop { count } => {
                let depth = self.stack.len();
                self.stack.truncate(depth - count);
                for exit_id in &transition.exits {
                    self.view_mut(exit_id).after_exit(false, partner_of_exit, true);
                }
                if let Some(enter_id) = &transition.enter {
                    self.view_mut(enter_id).after_enter(false, partner_of_enter);
                }
                self.backdrops
                    .retain(|backdrop| !transition.exits.iter().any(|id| id == backdrop.modal_id()));
            }
        }

        self.unlock_input();
        transition.done.set(TaskStatus::Completed);
        log::debug!("{}: transition committed, stack {:?}", K::NAME, self.stack);
    }
}

impl<K: ContainerKind> Default for NavigationStack<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ContainerKind> Drop for NavigationStack<K> {
    fn drop(&mut self) {
        self.backdrops.clear();
        for view in &mut self.views {
            view.destroy();
        }
    }
}
