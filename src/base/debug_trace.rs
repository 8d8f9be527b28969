use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "debug_trace")] {
        macro_rules! trace {
            ( @cursor $action:expr, $index:expr ) => {
                println!("@cursor {}: {}", $action, $index);
            };

            ( @splice $position:expr, $count:expr ) => {
                println!("@splice {} token(s) at {}", $count, $position);
            };

            ( @rebase $position:expr, $offset:expr ) => {
                println!("@rebase bookmarks >= {} by {}", $position, $offset);
            };

            ( @parse $token:expr ) => {
                println!("@parse {:?}", $token);
            };
        }
    } else {
        macro_rules! trace {
            ( $($args:tt)+ ) => {};
        }
    }
}
