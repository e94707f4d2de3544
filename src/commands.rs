/// Resource names accepted on the command line, with alias resolution

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
  Cities,
  SportClubs,
  SportTypes,
  TournamentCategories,
  Favorites,
  News,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCommand {
  pub name: &'static str,
  pub aliases: &'static [&'static str],
  pub description: &'static str,
  pub kind: ResourceKind,
}

/// All resources the CLI can manage
pub const RESOURCES: &[ResourceCommand] = &[
  ResourceCommand {
    name: "cities",
    aliases: &["c", "city"],
    description: "Cities and their coordinates",
    kind: ResourceKind::Cities,
  },
  ResourceCommand {
    name: "sport-clubs",
    aliases: &["sc", "club", "clubs", "sport-club"],
    description: "Sport clubs",
    kind: ResourceKind::SportClubs,
  },
  ResourceCommand {
    name: "sport-types",
    aliases: &["st", "type", "types", "sport-type"],
    description: "Kinds of sport",
    kind: ResourceKind::SportTypes,
  },
  ResourceCommand {
    name: "tournament-categories",
    aliases: &["tc", "category", "categories", "tournaments"],
    description: "Tournament age categories",
    kind: ResourceKind::TournamentCategories,
  },
  ResourceCommand {
    name: "favorites",
    aliases: &["f", "fav", "favourites"],
    description: "Users' favorite clubs",
    kind: ResourceKind::Favorites,
  },
  ResourceCommand {
    name: "news",
    aliases: &["n", "articles"],
    description: "News articles",
    kind: ResourceKind::News,
  },
];

/// Get ranked suggestions for a given input
pub fn get_suggestions(input: &str) -> Vec<&'static ResourceCommand> {
  let input_lower = input.trim().to_lowercase();

  if input_lower.is_empty() {
    return RESOURCES.iter().collect();
  }

  let mut matches: Vec<(&ResourceCommand, u32)> = Vec::new();

  for cmd in RESOURCES {
    if cmd.name == input_lower {
      matches.push((cmd, 0));
      continue;
    }

    if cmd.aliases.contains(&input_lower.as_str()) {
      matches.push((cmd, 1));
      continue;
    }

    if cmd.name.starts_with(&input_lower) {
      matches.push((cmd, 2));
      continue;
    }

    if cmd.aliases.iter().any(|a| a.starts_with(&input_lower)) {
      matches.push((cmd, 3));
      continue;
    }

    if cmd.name.contains(&input_lower) {
      matches.push((cmd, 4));
      continue;
    }

    if cmd.aliases.iter().any(|a| a.contains(&input_lower)) {
      matches.push((cmd, 5));
    }
  }

  // Stable sort keeps declaration order among equal ranks
  matches.sort_by_key(|(_, priority)| *priority);

  matches.into_iter().map(|(cmd, _)| cmd).collect()
}

/// Resolve input to a single resource.
///
/// Exact names and aliases always win; otherwise the input must match
/// exactly one resource by prefix or substring.
pub fn resolve(input: &str) -> Result<ResourceKind, Vec<&'static ResourceCommand>> {
  let suggestions = get_suggestions(input);
  let input_lower = input.trim().to_lowercase();

  if let Some(cmd) = suggestions
    .iter()
    .find(|cmd| cmd.name == input_lower || cmd.aliases.contains(&input_lower.as_str()))
  {
    return Ok(cmd.kind);
  }

  if let ([only], false) = (suggestions.as_slice(), input_lower.is_empty()) {
    return Ok(only.kind);
  }

  Err(suggestions)
}

/// One line per suggestion: name, description and aliases
pub fn describe(suggestions: &[&ResourceCommand]) -> String {
  suggestions
    .iter()
    .map(|cmd| {
      format!(
        "  {:<24}{} ({})",
        cmd.name,
        cmd.description,
        cmd.aliases.join(", ")
      )
    })
    .collect::<Vec<_>>()
    .join("\n")
}
