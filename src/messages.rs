//! Built-in message table for the quick-pick file browser.
//!
//! Process-wide, read-only, initialized-once constant state: the table is
//! built on first access behind a [`LazyLock`] and never mutated afterwards,
//! so any thread may read it without locks. Every entry authors an `"en"`
//! text; `messages_validate` in the tests guards that invariant.

use std::sync::LazyLock;

use crate::catalog::{Catalog, PluralForms};

/// The built-in catalog, built exactly once.
static MESSAGES: LazyLock<Catalog> = LazyLock::new(build);

/// What: Access the built-in message catalog.
///
/// Output:
/// - A shared reference to the process-wide immutable catalog
#[must_use]
pub fn messages() -> &'static Catalog {
    &MESSAGES
}

/// Variant set with distinct singular and catch-all templates.
fn one_other(one: &str, other: &str) -> PluralForms {
    PluralForms {
        one: Some(one.to_string()),
        other: other.to_string(),
        ..Default::default()
    }
}

/// Variant set for locales without plural inflection: one template covers
/// every quantity, only the digit text differs by count.
fn invariant(other: &str) -> PluralForms {
    PluralForms {
        other: other.to_string(),
        ..Default::default()
    }
}

/// What: Build the built-in catalog.
///
/// Details:
/// - Countable entries carry the per-locale templates for file and directory
///   counts; plain entries carry the quick-pick labels, tooltips, and error
///   texts
/// - Irish and Welsh author identical text for some categories because the
///   words under test have no distinct form there; that is authored data,
///   not a rule-engine property
fn build() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.add_countable(
        "files",
        [
            ("en", one_other("{count} file", "{count} files")),
            ("de", one_other("{count} Datei", "{count} Dateien")),
            ("it", one_other("{count} file", "{count} file")),
            ("fr", one_other("{count} fichier", "{count} fichiers")),
            ("es", one_other("{count} archivo", "{count} archivos")),
            ("pt-br", one_other("{count} arquivo", "{count} arquivos")),
            ("ja", invariant("{count} ファイル")),
            ("ko", invariant("{count} 파일")),
            ("zh-cn", invariant("{count} 文件")),
            ("zh-tw", invariant("{count} 檔案")),
            ("tr", invariant("{count} dosya")),
            ("hu", invariant("{count} fájl")),
            (
                "ar",
                PluralForms {
                    zero: Some("{count} ملفات".to_string()),
                    one: Some("{count} ملف".to_string()),
                    two: Some("{count} ملفان".to_string()),
                    few: Some("{count} ملفات".to_string()),
                    many: Some("{count} ملفًا".to_string()),
                    other: "{count} ملف".to_string(),
                },
            ),
            (
                "ru",
                PluralForms {
                    one: Some("{count} файл".to_string()),
                    few: Some("{count} файла".to_string()),
                    many: Some("{count} файлов".to_string()),
                    other: "{count} файлов".to_string(),
                    ..Default::default()
                },
            ),
            (
                "pl",
                PluralForms {
                    one: Some("{count} plik".to_string()),
                    few: Some("{count} pliki".to_string()),
                    many: Some("{count} plików".to_string()),
                    other: "{count} plików".to_string(),
                    ..Default::default()
                },
            ),
            (
                "cs",
                PluralForms {
                    one: Some("{count} soubor".to_string()),
                    few: Some("{count} soubory".to_string()),
                    other: "{count} souborů".to_string(),
                    ..Default::default()
                },
            ),
            (
                "bg",
                PluralForms {
                    one: Some("{count} файл".to_string()),
                    few: Some("{count} файла".to_string()),
                    other: "{count} файла".to_string(),
                    ..Default::default()
                },
            ),
            (
                "ga",
                PluralForms {
                    one: Some("{count} comhad".to_string()),
                    two: Some("{count} chomhad".to_string()),
                    few: Some("{count} chomhad".to_string()),
                    other: "{count} comhad".to_string(),
                    ..Default::default()
                },
            ),
            (
                "cy",
                PluralForms {
                    one: Some("{count} ffeil".to_string()),
                    two: Some("{count} ffeil".to_string()),
                    other: "{count} ffeil".to_string(),
                    ..Default::default()
                },
            ),
        ],
    );

    catalog.add_countable(
        "directories",
        [
            ("en", one_other("{count} directory", "{count} directories")),
            ("fr", one_other("{count} répertoire", "{count} répertoires")),
            ("ja", invariant("{count} ディレクトリ")),
            ("zh-cn", invariant("{count} 个目录")),
        ],
    );

    // Common labels
    catalog.add_plain(
        "yes",
        [("en", "Yes"), ("ja", "はい"), ("fr", "Oui"), ("zh-cn", "是")],
    );
    catalog.add_plain(
        "search",
        [
            ("en", "Search"),
            ("ja", "検索"),
            ("fr", "Rechercher"),
            ("zh-cn", "搜索"),
        ],
    );
    catalog.add_plain(
        "showErrorDetailButtonCaption",
        [
            ("en", "Show Detail"),
            ("ja", "詳細を表示"),
            ("fr", "Afficher les détails"),
            ("zh-cn", "显示详细信息"),
        ],
    );

    // Path actions
    catalog.add_plain(
        "copyPathToClipboard",
        [
            ("en", "Copy path to clipboard"),
            ("ja", "パスをクリップボードにコピーする"),
        ],
    );
    catalog.add_plain(
        "openInEditor",
        [("en", "Open in editor"), ("ja", "エディタで開く")],
    );
    catalog.add_plain(
        "insertPathToActiveEditor",
        [
            ("en", "Insert path to active editor"),
            ("ja", "パスをアクティブなエディタに挿入する"),
        ],
    );
    catalog.add_plain(
        "insertPathToActiveTerminal",
        [
            ("en", "Insert path to active terminal"),
            ("ja", "パスをアクティブなターミナルに挿入する"),
        ],
    );
    catalog.add_plain(
        "revealInFileExplorer",
        [
            ("en", "Reveal in File Explorer"),
            ("ja", "ファイルエクスプローラーを開く"),
        ],
    );
    catalog.add_plain(
        "revealInExplorerCommandLabel",
        [
            ("en", "Open this directory in {app}"),
            ("ja", "このディレクトリを{app}で開く"),
            ("fr", "Ouvrir ce répertoire dans {app}"),
            ("zh-cn", "在{app}中打开此目录"),
        ],
    );

    // Section separators
    catalog.add_plain(
        "commands",
        [
            ("en", "Commands"),
            ("ja", "コマンド"),
            ("fr", "Commandes"),
            ("zh-cn", "命令"),
        ],
    );
    catalog.add_plain(
        "actions",
        [
            ("en", "Actions"),
            ("ja", "アクション"),
            ("fr", "Actions"),
            ("zh-cn", "操作"),
        ],
    );

    // Base directory handling
    catalog.add_plain(
        "command.setBaseDirectory",
        [
            ("en", "Set this directory as base directory"),
            ("ja", "このディレクトリを基準ディレクトリとして設定する"),
        ],
    );
    catalog.add_plain(
        "command.clearBaseDirectory",
        [
            ("en", "Clear base directory"),
            ("ja", "基準ディレクトリをクリアする"),
        ],
    );
    catalog.add_plain(
        "baseDirectory",
        [("en", "Base Dir"), ("ja", "基準ディレクトリ")],
    );
    catalog.add_plain("baseDirectoryUnset", [("en", "Unset"), ("ja", "未設定")]);
    catalog.add_plain(
        "baseDirectoryUpdated",
        [
            ("en", "Base directory is set: {dir}"),
            ("ja", "基準ディレクトリを設定しました: {dir}"),
        ],
    );
    catalog.add_plain(
        "baseDirectoryCleared",
        [
            ("en", "Base directory is cleared."),
            ("ja", "基準ディレクトリをクリアしました。"),
        ],
    );
    catalog.add_plain(
        "error.couldntSetBaseDirectory",
        [
            ("en", "Couldn't set base directory"),
            ("ja", "基準ディレクトリを設定できませんでした"),
        ],
    );

    // Hidden file toggles
    catalog.add_plain(
        "showHiddenFiles",
        [
            ("en", "Show hidden files (files starting with a dot)"),
            ("ja", "隠しファイル（.で始まるファイル）を表示する"),
        ],
    );
    catalog.add_plain(
        "hideHiddenFiles",
        [
            ("en", "Hide hidden files (files starting with a dot)"),
            ("ja", "隠しファイル（.で始まるファイル）を隠す"),
        ],
    );
    catalog.add_plain(
        "tooltip.showHiddenFiles",
        [
            ("en", "Show hidden files (files starting with a dot)."),
            ("ja", "隠しファイル（.で始まるファイル）を表示する。"),
        ],
    );
    catalog.add_plain(
        "tooltip.hideHiddenFiles",
        [
            ("en", "Hide hidden files (files starting with a dot)."),
            ("ja", "隠しファイル（.で始まるファイル）を隠す。"),
        ],
    );

    // Grouping and path-mode toggles
    catalog.add_plain(
        "tooltip.groupDirectories",
        [
            ("en", "Group directories and files."),
            ("ja", "ディレクトリとファイルを分けて表示する。"),
        ],
    );
    catalog.add_plain(
        "tooltip.ungroupDirectories",
        [
            ("en", "Ungroup directories and files."),
            ("ja", "ディレクトリとファイルを分けずに表示する。"),
        ],
    );
    catalog.add_plain(
        "tooltip.absolutePathMode",
        [("en", "Show absolute paths."), ("ja", "絶対パスで表示。")],
    );
    catalog.add_plain(
        "tooltip.relativePathMode",
        [("en", "Show relative paths."), ("ja", "相対パスで表示。")],
    );
    catalog.add_plain(
        "toAbsolutePathMode",
        [("en", "Absolute path mode"), ("ja", "絶対パスモードへ")],
    );
    catalog.add_plain(
        "toRelativePathMode",
        [("en", "Relative path mode"), ("ja", "相対パスモードへ")],
    );

    // Navigation commands
    catalog.add_plain(
        "gotoWorkspaceDir",
        [
            ("en", "Go to workspace directory"),
            ("ja", "ワークスペースのディレクトリに移動"),
        ],
    );
    catalog.add_plain(
        "gotoEditingFileDir",
        [
            ("en", "Go to editing file directory"),
            ("ja", "編集中のファイルのディレクトリに移動"),
        ],
    );
    catalog.add_plain(
        "gotoUserDir",
        [("en", "Go to user directory"), ("ja", "ユーザーのディレクトリに移動")],
    );
    catalog.add_plain(
        "inputPathCommand.label",
        [("en", "Go to input path"), ("ja", "パスを入力して移動")],
    );
    catalog.add_plain(
        "openDirectoryAsWorkspaceInNewWindow",
        [
            ("en", "Open this directory in new window"),
            ("ja", "このディレクトリを新しいウインドウで開く"),
        ],
    );
    catalog.add_plain(
        "backToBrowseModeItemLabel",
        [("en", "Back to \"{dir}\""), ("ja", "{dir} に戻る")],
    );
    catalog.add_plain(
        "directoryTree",
        [("en", "Directory tree"), ("ja", "ディレクトリツリー")],
    );

    // Pinned items and favorites
    catalog.add_plain(
        "pinThis",
        [
            ("en", "Pin to quick access"),
            ("ja", "クイックアクセスにピン留めする"),
        ],
    );
    catalog.add_plain(
        "unpinThis",
        [
            ("en", "Unpin from quick access"),
            ("ja", "クイックアクセスからピン留めを解除"),
        ],
    );
    catalog.add_plain(
        "addToFavorite",
        [("en", "Add to favorites"), ("ja", "お気に入りに追加する")],
    );
    catalog.add_plain(
        "removeFromFavorite",
        [("en", "Remove from favorites"), ("ja", "お気に入りから削除する")],
    );
    catalog.add_plain(
        "quickAccesses",
        [("en", "Quick Access"), ("ja", "クイックアクセス")],
    );
    catalog.add_plain(
        "favoriteQuickPickTitle",
        [("en", "Favorites"), ("ja", "お気に入り")],
    );
    catalog.add_plain(
        "noFavorites",
        [("en", "No favorite items."), ("ja", "お気に入りがありません。")],
    );
    catalog.add_plain(
        "failedToWritePinnedList",
        [
            ("en", "Failed to write the quick access list."),
            ("ja", "クイックアクセスの書き込みに失敗しました。"),
        ],
    );
    catalog.add_plain(
        "failedToWriteFavoriteList",
        [
            ("en", "Failed to write the favorite list."),
            ("ja", "お気に入りの書き込みに失敗しました。"),
        ],
    );

    // Errors surfaced to the user
    catalog.add_plain(
        "error.directoryNotFound",
        [
            ("en", "Directory \"{dir}\" not found."),
            ("ja", "ディレクトリ {dir} は存在しません。"),
        ],
    );
    catalog.add_plain(
        "error.listFilesFailed",
        [
            ("en", "Failed to get files in \"{dir}\"."),
            ("ja", "{dir} 内のファイル取得に失敗しました。"),
        ],
    );
    catalog.add_plain(
        "error.couldntOpenWorkspace",
        [
            ("en", "Couldn't open directory"),
            ("ja", "ディレクトリを開けませんでした"),
        ],
    );
    catalog.add_plain(
        "directoryNotFoundItemLabel",
        [
            ("en", "The directory not found."),
            ("ja", "ディレクトリが見付かりません。"),
        ],
    );

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plural::PluralCategory;
    use crate::resolver::pluralize_in;

    #[test]
    fn builtin_catalog_defines_english_everywhere() {
        assert_eq!(messages().validate(), Ok(()));
    }

    #[test]
    fn builtin_catalog_is_shared() {
        // Both calls must observe the same initialized-once table
        assert!(std::ptr::eq(messages(), messages()));
        assert!(!messages().is_empty());
    }

    #[test]
    fn files_entry_matches_authored_variants() {
        let catalog = messages();
        assert_eq!(
            catalog.variant_for("files", "en", PluralCategory::One).unwrap(),
            "{count} file"
        );
        assert_eq!(
            catalog.variant_for("files", "ar", PluralCategory::Two).unwrap(),
            "{count} ملفان"
        );
        assert_eq!(
            catalog.variant_for("files", "ja", PluralCategory::Other).unwrap(),
            "{count} ファイル"
        );
    }

    #[test]
    fn directories_entry_renders() {
        assert_eq!(
            pluralize_in(messages(), "directories", 1, "en").unwrap(),
            "1 directory"
        );
        assert_eq!(
            pluralize_in(messages(), "directories", 4, "en").unwrap(),
            "4 directories"
        );
        assert_eq!(
            pluralize_in(messages(), "directories", 4, "ja").unwrap(),
            "4 ディレクトリ"
        );
    }

    #[test]
    fn plain_labels_resolve() {
        let catalog = messages();
        assert_eq!(catalog.english("quickAccesses").unwrap(), "Quick Access");
        assert_eq!(catalog.text_for("search", "zh-cn").unwrap(), "搜索");
        // A locale the entry never authored degrades to English
        assert_eq!(catalog.text_for("pinThis", "ru").unwrap(), "Pin to quick access");
    }
}
