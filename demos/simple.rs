use eyre::Result;
use fibkont::{Continuation, Evaluator, IterativeEvaluator, Limits, RecursiveEvaluator};

fn main() -> Result<()> {
    pretty_env_logger::formatted_builder().filter_level(log::LevelFilter::Debug).init();

    let recursive = RecursiveEvaluator::new(Limits::default());
    let iterative = IterativeEvaluator::new(Limits::default());
    assert_eq!(recursive.fibonacci::<u64>(10)?, 55);
    assert_eq!(iterative.fibonacci::<u64>(30)?, 832040);

    // resume a chain that still owes fib(5 - 2) and fib(7 - 2)
    let pending = Continuation::empty().push(7)?.push(5)?;
    let evaluation = iterative.evaluate::<u64>(4, pending)?;
    assert_eq!(evaluation.value, 3 + 2 + 5);

    println!("fibonacci(30) = {}", fibkont::fibonacci(30)?);
    Ok(())
}
