//! Built-in layouts, selectable by name.

const MINIMAX_CLASSIC: &str = "\
%%%%%%%%%
%.P    G%
% %.%G%%%
%G    %%%
%%%%%%%%%
";

const TEST_CLASSIC: &str = "\
%%%%%
% . %
%.G.%
% . %
%. .%
%   %
%  .%
%   %
%P .%
%%%%%
";

const TRAPPED_CLASSIC: &str = "\
%%%%%%%%
%   P G%
%G%%%%%%
%....  %
%%%%%%%%
";

const SMALL_CLASSIC: &str = "\
%%%%%%%%%%%%%%%%%%%%
%......%G  G%......%
%.%%...%%  %%...%%.%
%.%o.%........%.o%.%
%.%%.%.%%%%%%.%.%%.%
%........P.........%
%%%%%%%%%%%%%%%%%%%%
";

const CAPSULE_CLASSIC: &str = "\
%%%%%%%%%%%%%%%%%%%
%G.       G   ....%
%.% % %%%%%% %.%%.%
%.%o% %   o% %.o%.%
%.%%%.%  %%% %..%.%
%.....  P    %..%G%
%%%%%%%%%%%%%%%%%%%
";

const OPEN_CLASSIC: &str = "\
%%%%%%%%%%%%%%%%%%%%%%%%%
%.. P  ....      ....   %
%..  ...  ...  ...  ... %
%..  ...  ...  ...  ... %
%..    ....      .... G %
%..  ...  ...  ...  ... %
%..  ...  ...  ...  ... %
%..    ....      ....  o%
%%%%%%%%%%%%%%%%%%%%%%%%%
";

pub const BUILTIN_LAYOUTS: [(&str, &str); 6] = [
    ("minimaxClassic", MINIMAX_CLASSIC),
    ("testClassic", TEST_CLASSIC),
    ("trappedClassic", TRAPPED_CLASSIC),
    ("smallClassic", SMALL_CLASSIC),
    ("capsuleClassic", CAPSULE_CLASSIC),
    ("openClassic", OPEN_CLASSIC),
];

pub fn builtin(name: &str) -> Option<&'static str> {
    BUILTIN_LAYOUTS
        .iter()
        .find(|(builtin_name, _)| *builtin_name == name)
        .map(|(_, text)| *text)
}

pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_LAYOUTS.iter().map(|(name, _)| *name)
}
