//! Basic usage of exactvec::Array
//!
//! Recovered errors go through the `log` facade and stay silent unless the
//! application installs a logger.

use exactvec::{Array, ArrayError, Config, ReportConfig, SortOrder};

fn main() -> Result<(), ArrayError> {
    exactvec::init_with_config(ReportConfig::from_env()?)?;

    println!("=== Construction ===");
    let zeros: Array<i32> = Array::with_len(3)?;
    zeros.print_array()?;

    match Array::<i32>::with_len(0) {
        Ok(array) => println!("with_len(0) returned {} elements", array.count()),
        Err(err) => println!("with_len(0): {} ({})", err.show_error(), err.category()),
    }

    println!("\n=== Mutators ===");
    let mut array = Array::new();
    for value in [5, 3, 1, 4, 2] {
        array.append(value);
    }
    array.insert_first(0)?;
    array.insert_at(3, 7)?;
    array.print_array()?;

    println!("removed first: {}", array.remove_first()?);
    println!("removed last: {}", array.remove_last()?);
    println!("removed at 1: {}", array.remove_at(1)?);

    if let Err(err) = array.insert_at(-1, 9) {
        println!("insert_at(-1): {}", err.show_error());
    }

    println!("\n=== Search and filter ===");
    println!("first index of 7: {:?}", array.get_first_index_where(&7)?);
    println!("elements > 2: {:?}", array.filter('>', &2)?);

    println!("\n=== Sort ===");
    array.sort(SortOrder::Ascending);
    println!("ascending: {:?}", array);
    array.sort_by_symbol('<');
    println!("descending: {:?}", array);

    println!("\n=== Concatenation and equality ===");
    let copy = array.clone();
    let joined = array + &copy;
    println!("joined: {:?} (count {})", joined, joined.count());
    println!("copy == copy.clone(): {}", copy == copy.clone());

    Ok(())
}
