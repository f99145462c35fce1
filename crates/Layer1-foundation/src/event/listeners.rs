//! Listeners - 불변 리스너 레지스트리
//!
//! 0개, 1개, 여러 개의 리스너 핸들을 담는 영속(persistent) 단일 연결 리스트입니다.
//!
//! ```text
//! Empty
//! One(A)
//! Many: [C] -> [B] -> [A]      (head = 가장 최근, tail = 가장 오래됨)
//!
//! snapshot() = [A, B, C]       (등록 순서)
//! ```
//!
//! 모든 연산은 새 값을 반환하고, 이전 값은 절대 수정하지 않습니다.
//! 제거 시에는 매칭된 노드 위쪽 prefix만 복사하고 나머지 tail은 공유합니다.

use super::listener::ListenerHandle;
use super::types::ChartEvent;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

// ============================================================================
// Chain Node
// ============================================================================

struct Node {
    listener: ListenerHandle,
    next: Option<Rc<Node>>,
}

impl Node {
    fn iter(&self) -> impl Iterator<Item = &ListenerHandle> {
        std::iter::successors(Some(self), |node| node.next.as_deref()).map(|node| &node.listener)
    }
}

impl Drop for Node {
    // 긴 체인에서 노드마다 재귀 drop 하지 않도록 직접 풀어준다
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

#[derive(Clone, Default)]
enum State {
    #[default]
    Empty,
    One(ListenerHandle),
    /// 항상 2개 이상
    Many(Rc<Node>),
}

// ============================================================================
// Listeners
// ============================================================================

/// 리스너 레지스트리 값
///
/// ## 사용법
///
/// ```ignore
/// let listeners = Listeners::new()
///     .add(&first)
///     .add(&second);
///
/// for listener in listeners.snapshot() {
///     listener.chart_click(&event);
/// }
///
/// let listeners = listeners.remove(&first);
/// ```
#[derive(Clone, Default)]
pub struct Listeners {
    state: State,
}

impl Listeners {
    /// 빈 레지스트리
    pub fn new() -> Self {
        Self::default()
    }

    fn one(listener: ListenerHandle) -> Self {
        Self {
            state: State::One(listener),
        }
    }

    /// 체인 길이에 맞는 표현으로 정규화
    fn from_chain(chain: Option<Rc<Node>>) -> Self {
        match chain {
            None => Self::new(),
            Some(node) if node.next.is_none() => Self::one(node.listener.clone()),
            Some(node) => Self {
                state: State::Many(node),
            },
        }
    }

    fn prepend(listener: &ListenerHandle, next: Rc<Node>) -> Self {
        Self {
            state: State::Many(Rc::new(Node {
                listener: listener.clone(),
                next: Some(next),
            })),
        }
    }

    /// 리스너 추가 (중복 검사)
    pub fn add(&self, listener: &ListenerHandle) -> Self {
        self.add_with(Some(listener), true)
    }

    /// 리스너 추가
    ///
    /// - `None`은 아무것도 추가하지 않음
    /// - `check_duplicates`가 true이고 이미 등록된 핸들이면 같은 값을 그대로 반환
    /// - 단일 상태(`One(h) + h`)의 no-op도 `check_duplicates`를 따름. false면 `h`가 두 번 등록됨
    /// - 그 외에는 새 핸들을 체인 head에 붙임
    pub fn add_with(&self, listener: Option<&ListenerHandle>, check_duplicates: bool) -> Self {
        let Some(listener) = listener else {
            return self.clone();
        };

        match &self.state {
            State::Empty => Self::one(listener.clone()),
            State::One(current) => {
                if check_duplicates && current.same(listener) {
                    return self.clone();
                }
                let tail = Rc::new(Node {
                    listener: current.clone(),
                    next: None,
                });
                Self::prepend(listener, tail)
            }
            State::Many(head) => {
                if check_duplicates && head.iter().any(|l| l.same(listener)) {
                    return self.clone();
                }
                Self::prepend(listener, Rc::clone(head))
            }
        }
    }

    /// 리스너 제거 (identity 기준)
    ///
    /// 없는 핸들 제거는 no-op입니다. 중복 등록된 경우 가장 최근 것 하나만 제거합니다.
    pub fn remove(&self, listener: &ListenerHandle) -> Self {
        match &self.state {
            State::Empty => Self::new(),
            State::One(current) => {
                if current.same(listener) {
                    Self::new()
                } else {
                    self.clone()
                }
            }
            State::Many(head) => {
                let mut prefix = Vec::new();
                let mut cursor = Some(head);

                while let Some(node) = cursor {
                    if node.listener.same(listener) {
                        let mut chain = node.next.clone();
                        for kept in prefix.into_iter().rev() {
                            chain = Some(Rc::new(Node {
                                listener: kept,
                                next: chain,
                            }));
                        }
                        return Self::from_chain(chain);
                    }
                    prefix.push(node.listener.clone());
                    cursor = node.next.as_ref();
                }

                self.clone()
            }
        }
    }

    /// 등록 순서(오래된 것 먼저)의 스냅샷
    pub fn snapshot(&self) -> Vec<ListenerHandle> {
        match &self.state {
            State::Empty => Vec::new(),
            State::One(listener) => vec![listener.clone()],
            State::Many(head) => {
                let mut all: Vec<ListenerHandle> = head.iter().cloned().collect();
                all.reverse();
                all
            }
        }
    }

    /// 등록된 핸들 수 (중복 포함)
    pub fn len(&self) -> usize {
        match &self.state {
            State::Empty => 0,
            State::One(_) => 1,
            State::Many(head) => head.iter().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, State::Empty)
    }

    pub fn contains(&self, listener: &ListenerHandle) -> bool {
        match &self.state {
            State::Empty => false,
            State::One(current) => current.same(listener),
            State::Many(head) => head.iter().any(|l| l.same(listener)),
        }
    }

    /// 두 값이 같은 표현을 공유하는지 (새 할당 없이 반환되었는지)
    pub fn ptr_eq(&self, other: &Listeners) -> bool {
        match (&self.state, &other.state) {
            (State::Empty, State::Empty) => true,
            (State::One(a), State::One(b)) => a.same(b),
            (State::Many(a), State::Many(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// 스냅샷을 한 번 뜬 뒤 순서대로 전달
    pub fn dispatch(&self, event: &ChartEvent) -> usize {
        dispatch_all(self, event)
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.snapshot()).finish()
    }
}

/// 등록된 모든 리스너에게 이벤트 전달
///
/// 콜백이 레지스트리를 바꾸더라도 이번 디스패치는 이미 뜬 스냅샷을 그대로 사용합니다.
pub fn dispatch_all(listeners: &Listeners, event: &ChartEvent) -> usize {
    let snapshot = listeners.snapshot();

    for listener in &snapshot {
        trace!(
            listener_name = listener.name(),
            source = %event.source,
            label = event.label().unwrap_or_default(),
            "Delivering chart event to listener"
        );
        listener.chart_click(event);
    }

    snapshot.len()
}

// ============================================================================
// 테스트
// ============================================================================
