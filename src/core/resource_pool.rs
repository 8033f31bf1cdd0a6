use super::config::Discipline;
use super::customer::{Customer, CustomerState};
use super::error::{SimError, SimResult};
use super::types::CustomerId;
use log::debug;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Outcome of a server request
#[derive(Debug, PartialEq)]
pub enum Admission {
    /// A server was free; the customer can start service now
    Granted(Customer),
    /// All servers busy; the pool holds the customer until a release
    Queued,
}

/// Queued customer keyed by `(priority_key, arrival sequence)`
#[derive(Debug)]
struct PendingRequest {
    customer: Customer,
}

impl PendingRequest {
    fn key(&self) -> (f64, CustomerId) {
        (self.customer.priority_key, self.customer.id)
    }
}

impl PartialEq for PendingRequest {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PendingRequest {}

impl PartialOrd for PendingRequest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingRequest {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap yields the smallest key first
        let (key, id) = self.key();
        let (other_key, other_id) = other.key();
        other_key.total_cmp(&key).then_with(|| other_id.cmp(&id))
    }
}

#[derive(Debug)]
enum PendingQueue {
    Fifo(VecDeque<Customer>),
    Priority(BinaryHeap<PendingRequest>),
}

impl PendingQueue {
    fn push(&mut self, customer: Customer) {
        match self {
            PendingQueue::Fifo(queue) => queue.push_back(customer),
            PendingQueue::Priority(heap) => heap.push(PendingRequest { customer }),
        }
    }

    fn pop(&mut self) -> Option<Customer> {
        match self {
            PendingQueue::Fifo(queue) => queue.pop_front(),
            PendingQueue::Priority(heap) => heap.pop().map(|request| request.customer),
        }
    }

    fn len(&self) -> usize {
        match self {
            PendingQueue::Fifo(queue) => queue.len(),
            PendingQueue::Priority(heap) => heap.len(),
        }
    }
}

/// `n` identical servers with a waiting line ordered by the pool's discipline.
///
/// The pool owns queued customers. A granted customer is handed back to the
/// caller, which keeps it until service completes and `release` is called.
#[derive(Debug)]
pub struct ResourcePool {
    capacity: usize,
    busy_count: usize,
    discipline: Discipline,
    pending: PendingQueue,
}

impl ResourcePool {
    pub fn new(capacity: usize, discipline: Discipline) -> SimResult<Self> {
        if capacity == 0 {
            return Err(SimError::InvalidParameter(
                "resource pool needs at least one server".to_string(),
            ));
        }
        let pending = match discipline {
            Discipline::Fifo => PendingQueue::Fifo(VecDeque::new()),
            Discipline::ShortestServiceFirst => PendingQueue::Priority(BinaryHeap::new()),
        };
        Ok(Self {
            capacity,
            busy_count: 0,
            discipline,
            pending,
        })
    }

    /// Grant a server if one is free, otherwise queue the customer
    pub fn request(&mut self, mut customer: Customer) -> SimResult<Admission> {
        if self.busy_count < self.capacity {
            self.busy_count += 1;
            debug!(
                "customer {} granted a server ({}/{} busy)",
                customer.id, self.busy_count, self.capacity
            );
            return Ok(Admission::Granted(customer));
        }

        customer.transition(CustomerState::Queued)?;
        debug!(
            "customer {} queued behind {} others",
            customer.id,
            self.pending.len()
        );
        self.pending.push(customer);
        Ok(Admission::Queued)
    }

    /// Free one server and hand it straight to the next queued customer, if any.
    ///
    /// The returned customer already holds the server.
    pub fn release(&mut self) -> SimResult<Option<Customer>> {
        if self.busy_count == 0 {
            return Err(SimError::ResourceUnderflow);
        }
        self.busy_count -= 1;

        let next = self.pending.pop();
        if let Some(customer) = &next {
            self.busy_count += 1;
            debug!(
                "customer {} granted a released server ({} still waiting)",
                customer.id,
                self.pending.len()
            );
        }
        Ok(next)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn busy_count(&self) -> usize {
        self.busy_count
    }

    pub fn queue_len(&self) -> usize {
        self.pending.len()
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }
}
