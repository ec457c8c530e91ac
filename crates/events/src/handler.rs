/// Execute an aggregate command deterministically (no IO, no async).
///
/// The canonical lifecycle:
///
/// 1. **Decide**: call `aggregate.handle(command)` to get events (pure, no
///    mutation).
/// 2. **Evolve**: apply each event to the aggregate via `aggregate.apply`.
///
/// The returned events are what actually happened; an empty vec means the
/// command was a legitimate no-op (e.g. removing an absent cart entry). The
/// aggregate is mutated in place, so reads taken immediately afterwards see
/// the new state — there is no asynchronous catch-up anywhere in this core.
pub fn execute<A>(aggregate: &mut A, command: &A::Command) -> Result<Vec<A::Event>, A::Error>
where
    A: techstore_core::Aggregate,
{
    let events = A::handle(aggregate, command)?;
    for ev in &events {
        A::apply(aggregate, ev);
    }
    Ok(events)
}
