//! Numeric puzzles.

/// Classic FizzBuzz: multiples of three render as `Fizz`, multiples of five
/// as `Buzz`, multiples of both as `FizzBuzz`, everything else as the number
/// itself.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::numbers::fizz_buzz;
///
/// assert_eq!(fizz_buzz(2), "2");
/// assert_eq!(fizz_buzz(15), "FizzBuzz");
/// ```
pub fn fizz_buzz(n: u32) -> String {
    match (n % 3, n % 5) {
        (0, 0) => "FizzBuzz".to_string(),
        (0, _) => "Fizz".to_string(),
        (_, 0) => "Buzz".to_string(),
        _ => n.to_string(),
    }
}

/// Factorial of `n`, with `factorial(0) == 1`.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::numbers::factorial;
///
/// assert_eq!(factorial(5), 120);
/// assert_eq!(factorial(10), 3_628_800);
/// ```
pub fn factorial(n: u64) -> u64 {
    (1..=n).product()
}

/// Sum of the integers from `first` to `last` inclusive.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::numbers::sum_between;
///
/// assert_eq!(sum_between(5, 10), 45);
/// assert_eq!(sum_between(-1, 1), 0);
/// ```
pub fn sum_between(first: i64, last: i64) -> i64 {
    (first..=last).sum()
}

/// Reverse the decimal digits of `n`. Trailing zeros disappear, so the
/// operation is not self-inverse in general.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::numbers::reverse_integer;
///
/// assert_eq!(reverse_integer(12_345), 54_321);
/// assert_eq!(reverse_integer(87_354), 45_378);
/// ```
pub fn reverse_integer(n: u64) -> u64 {
    let mut remaining = n;
    let mut reversed = 0;
    while remaining > 0 {
        reversed = reversed * 10 + remaining % 10;
        remaining /= 10;
    }
    reversed
}

/// Validate a credit card number with the Luhn checksum.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::numbers::is_valid_card_number;
///
/// assert!(is_valid_card_number(4_012_888_888_881_881));
/// assert!(!is_valid_card_number(4_571_234_567_890_111));
/// ```
pub fn is_valid_card_number(ccn: u64) -> bool {
    let mut sum = 0;
    let mut remaining = ccn;
    let mut double = false;
    while remaining > 0 {
        let mut digit = remaining % 10;
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
        remaining /= 10;
    }
    sum % 10 == 0
}

/// Digital root: sum the decimal digits, repeating until a single digit
/// remains.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::numbers::digital_root;
///
/// assert_eq!(digital_root(12_345), 6);
/// assert_eq!(digital_root(10_000), 1);
/// ```
pub fn digital_root(n: u64) -> u64 {
    let mut value = n;
    while value > 9 {
        let mut sum = 0;
        while value > 0 {
            sum += value % 10;
            value /= 10;
        }
        value = sum;
    }
    value
}

/// Render `n` in the given radix, 2..=10.
///
/// # Panics
///
/// Panics if `radix` is outside 2..=10.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::numbers::to_radix_string;
///
/// assert_eq!(to_radix_string(1024, 2), "10000000000");
/// assert_eq!(to_radix_string(365, 4), "11231");
/// ```
pub fn to_radix_string(n: u64, radix: u32) -> String {
    assert!((2..=10).contains(&radix), "radix must be in 2..=10");
    let radix = u64::from(radix);
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    let mut remaining = n;
    while remaining > 0 {
        digits.push(b'0' + (remaining % radix) as u8);
        remaining /= radix;
    }
    digits.reverse();
    String::from_utf8(digits).expect("digits are ASCII")
}

/// Whether sides `a`, `b`, `c` can form a triangle: the two smaller sides
/// must sum to strictly more than the largest.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::numbers::is_triangle;
///
/// assert!(is_triangle(3.0, 4.0, 5.0));
/// assert!(!is_triangle(10.0, 1.0, 1.0));
/// ```
pub fn is_triangle(a: f64, b: f64, c: f64) -> bool {
    let mut sides = [a, b, c];
    sides.sort_by(|x, y| x.total_cmp(y));
    sides[0] > 0.0 && sides[0] + sides[1] > sides[2]
}
