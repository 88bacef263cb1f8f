/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing the ring macro. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a ring with the points given as a list of (x, y) tuples.
///
/// Points are taken as given, repeat the first point at the end to get the closing convention of
/// traced rings.
///
/// # Examples
///
/// ```
/// # use iso_contours::ring;
/// # use iso_contours::core::math::Vector2;
/// let ring = ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)];
/// assert!(ring.is_closed());
/// assert_eq!(ring.vertex_count(), 4);
/// assert_eq!(ring[1], Vector2::new(1.0, 0.0));
/// ```
#[macro_export]
macro_rules! ring {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut ring = $crate::ring::Ring::with_capacity(size);
            $(
                ring.add($x.0, $x.1);
            )*
            ring
        }
    };
}
