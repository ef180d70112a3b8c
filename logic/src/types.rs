pub type FilePath = relative_path::RelativePathBuf;
