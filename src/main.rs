use std::time::Duration;

use tracing_subscriber::EnvFilter;
use utility_belt::arrays::{difference, flatten, intersection, shuffle, sort_by_property, zip};
use utility_belt::collections::{each, filter, pluck, reduce, uniq};
use utility_belt::functions::{ManualScheduler, delay, memoize, once};
use utility_belt::objects::defaults;
use utility_belt::value::Value;
use utility_belt::{array, object};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("\n[Collections]\n");

    let stooges = [
        object! { "name" => "moe", "age" => 40 },
        object! { "name" => "larry", "age" => 50 },
        object! { "name" => "curly", "age" => 60 },
    ];
    println!("{:?}", pluck(&stooges, "name"));
    println!("{:?}", filter(&[1, 2, 3, 4, 5, 6], |n| n % 2 == 0));
    println!("{:?}", uniq(&[1, 2, 1, 3, 1, 4]));
    println!("{:?}", reduce(&[1, 2, 3], |acc, n| acc + n, Some(0)));
    each(&object! { "one" => 1, "two" => 2 }, |value, key, _| {
        println!("{key} = {value}");
    });

    println!("\n[Arrays]\n");

    println!("{:?}", shuffle(&[1, 2, 3, 4, 5, 6]));
    for stooge in sort_by_property(&stooges, "age").iter().rev() {
        println!("{stooge}");
    }
    println!("{:?}", zip(&[&["moe", "larry", "curly"][..], &["30", "40", "50"]]));
    println!("{}", Value::from_iter(flatten(&[array![1, array![2, array![3, array![4]]]]])));
    println!("{:?}", intersection(&[&[1, 2, 3][..], &[101, 2, 1, 10], &[2, 1]]));
    println!("{:?}", difference(&[1, 2, 3, 4, 5], &[&[5, 2, 10]]));

    println!("\n[Objects]\n");

    let mut icecream = object! { "flavor" => "chocolate" };
    if let (Some(target), Value::Object(source)) = (
        icecream.as_object_mut(),
        object! { "flavor" => "vanilla", "sprinkles" => "lots" },
    ) {
        defaults(target, &[&source]);
    }
    println!("{icecream}");

    println!("\n[Functions]\n");

    let mut initialize = once(|| {
        println!("initializing");
        true
    });
    initialize();
    initialize();

    let mut square = memoize(|n: u64| {
        println!("computing {n}^2");
        n * n
    });
    println!("{} {}", square(12), square(12));

    let scheduler = ManualScheduler::new();
    delay(&scheduler, |message| println!("{message}"), Duration::from_secs(1), "logged later");
    println!("waiting...");
    scheduler.advance(Duration::from_secs(1));

    #[cfg(all(feature = "time", target_os = "linux"))]
    {
        use utility_belt::functions::ThreadScheduler;

        let scheduler = ThreadScheduler::new().with_thread_name("delay");
        delay(
            &scheduler,
            |wait: Duration| println!("woke up after {wait:?}"),
            Duration::from_millis(100),
            Duration::from_millis(100),
        );
        scheduler.wait_idle();
    }
}
